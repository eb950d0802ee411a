//! Typewriter text cycler.
//!
//! Types a phrase one character at a time, pauses, deletes it, rests, then
//! moves on to the next phrase. Four phases, one timer:
//!
//! ```text
//!  Typing ──(full)──▶ PausedFull ──(pause)──▶ Deleting ──(empty)──▶ PausedEmpty
//!    ▲                                                                  │
//!    └──────────────────────(rest, next phrase)─────────────────────────┘
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};
use crate::timer::TimedMachine;

/// Durations driving a [`PhraseCycle`], in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterTiming {
    /// Delay between typed characters
    pub typing_ms: u64,
    /// Delay between deleted characters
    pub deleting_ms: u64,
    /// Hold time once a phrase is fully typed
    pub pause_ms: u64,
    /// Hold time once a phrase is fully deleted
    pub rest_ms: u64,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            typing_ms: 100,
            deleting_ms: 50,
            pause_ms: 1200,
            rest_ms: 400,
        }
    }
}

impl TypewriterTiming {
    /// Timing for a one-shot reveal typed at `typing_ms` per character.
    pub fn reveal(typing_ms: u64) -> Self {
        Self {
            typing_ms,
            ..Self::default()
        }
    }
}

/// Phase of the cycler
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CyclePhase {
    Typing,
    PausedFull,
    Deleting,
    PausedEmpty,
}

/// Whether the cycler loops through its phrases or stops after typing once
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CycleMode {
    #[default]
    Loop,
    Once,
}

/// Type / pause / delete / rest state machine over a list of phrases.
#[derive(Clone, Debug, PartialEq)]
pub struct PhraseCycle {
    phrases: Vec<String>,
    timing: TypewriterTiming,
    mode: CycleMode,
    phrase_index: usize,
    char_index: usize,
    phase: CyclePhase,
}

impl PhraseCycle {
    /// Create a looping cycler. Fails when `phrases` is empty.
    pub fn new(phrases: Vec<String>, timing: TypewriterTiming) -> SiteResult<Self> {
        if phrases.is_empty() {
            return Err(SiteError::EmptyPhrases);
        }
        let mut cycle = Self {
            phrases,
            timing,
            mode: CycleMode::Loop,
            phrase_index: 0,
            char_index: 0,
            phase: CyclePhase::Typing,
        };
        cycle.settle_typing();
        Ok(cycle)
    }

    /// Type `text` once and stop.
    pub fn once(text: impl Into<String>, typing_ms: u64) -> Self {
        let mut cycle = Self {
            phrases: vec![text.into()],
            timing: TypewriterTiming::reveal(typing_ms),
            mode: CycleMode::Once,
            phrase_index: 0,
            char_index: 0,
            phase: CyclePhase::Typing,
        };
        cycle.settle_typing();
        cycle
    }

    /// Currently displayed text.
    pub fn text(&self) -> &str {
        let phrase = self.current_phrase();
        let end = phrase
            .char_indices()
            .nth(self.char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn mode(&self) -> CycleMode {
        self.mode
    }

    pub fn timing(&self) -> TypewriterTiming {
        self.timing
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    /// True once a `Once` cycler has typed its whole text.
    pub fn is_finished(&self) -> bool {
        self.mode == CycleMode::Once && self.phase == CyclePhase::PausedFull
    }

    fn phrase_len(&self) -> usize {
        self.current_phrase().chars().count()
    }

    // An empty phrase has nothing to type.
    fn settle_typing(&mut self) {
        if self.phase == CyclePhase::Typing && self.char_index >= self.phrase_len() {
            self.phase = CyclePhase::PausedFull;
        }
    }
}

impl TimedMachine for PhraseCycle {
    fn next_delay(&self) -> Option<Duration> {
        let ms = match self.phase {
            CyclePhase::Typing => self.timing.typing_ms,
            CyclePhase::PausedFull if self.mode == CycleMode::Once => return None,
            CyclePhase::PausedFull => self.timing.pause_ms,
            CyclePhase::Deleting => self.timing.deleting_ms,
            CyclePhase::PausedEmpty => self.timing.rest_ms,
        };
        Some(Duration::from_millis(ms))
    }

    fn fire(&mut self) {
        match self.phase {
            CyclePhase::Typing => {
                self.char_index += 1;
                self.settle_typing();
            }
            CyclePhase::PausedFull => {
                if self.mode == CycleMode::Once {
                    return;
                }
                self.phase = if self.char_index == 0 {
                    CyclePhase::PausedEmpty
                } else {
                    CyclePhase::Deleting
                };
            }
            CyclePhase::Deleting => {
                self.char_index = self.char_index.saturating_sub(1);
                if self.char_index == 0 {
                    self.phase = CyclePhase::PausedEmpty;
                }
            }
            CyclePhase::PausedEmpty => {
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                self.char_index = 0;
                self.phase = CyclePhase::Typing;
                self.settle_typing();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(phrases: &[&str]) -> PhraseCycle {
        PhraseCycle::new(
            phrases.iter().map(|p| p.to_string()).collect(),
            TypewriterTiming::default(),
        )
        .unwrap()
    }

    #[test]
    fn rejects_empty_phrase_list() {
        let err = PhraseCycle::new(Vec::new(), TypewriterTiming::default()).unwrap_err();
        assert!(matches!(err, SiteError::EmptyPhrases));
    }

    #[test]
    fn types_then_pauses() {
        let mut c = cycle(&["abc"]);
        assert_eq!(c.text(), "");
        assert_eq!(c.next_delay(), Some(Duration::from_millis(100)));

        c.fire();
        assert_eq!(c.text(), "a");
        c.fire();
        c.fire();
        assert_eq!(c.text(), "abc");
        assert_eq!(c.phase(), CyclePhase::PausedFull);
        assert_eq!(c.next_delay(), Some(Duration::from_millis(1200)));
    }

    #[test]
    fn deletes_rests_and_advances() {
        let mut c = cycle(&["ab", "xyz"]);
        c.fire();
        c.fire(); // "ab", paused
        c.fire(); // deleting
        assert_eq!(c.phase(), CyclePhase::Deleting);
        assert_eq!(c.next_delay(), Some(Duration::from_millis(50)));
        c.fire();
        assert_eq!(c.text(), "a");
        c.fire();
        assert_eq!(c.text(), "");
        assert_eq!(c.phase(), CyclePhase::PausedEmpty);
        assert_eq!(c.next_delay(), Some(Duration::from_millis(400)));

        c.fire();
        assert_eq!(c.phrase_index(), 1);
        assert_eq!(c.phase(), CyclePhase::Typing);
        c.fire();
        assert_eq!(c.text(), "x");
    }

    #[test]
    fn wraps_to_first_phrase() {
        let mut c = cycle(&["a", "b"]);
        // a: type, pause, delete, rest; b: type, pause, delete, rest
        for _ in 0..8 {
            c.fire();
        }
        assert_eq!(c.phrase_index(), 0);
        assert_eq!(c.phase(), CyclePhase::Typing);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut c = cycle(&["héé"]);
        c.fire();
        c.fire();
        assert_eq!(c.text(), "hé");
        c.fire();
        assert_eq!(c.text(), "héé");
        assert_eq!(c.phase(), CyclePhase::PausedFull);
    }

    #[test]
    fn empty_phrase_skips_typing_and_deleting() {
        let mut c = cycle(&["", "z"]);
        assert_eq!(c.phase(), CyclePhase::PausedFull);
        c.fire();
        assert_eq!(c.phase(), CyclePhase::PausedEmpty);
        c.fire();
        assert_eq!(c.phrase_index(), 1);
        assert_eq!(c.phase(), CyclePhase::Typing);
    }

    #[test]
    fn once_mode_stops_when_typed() {
        let mut c = PhraseCycle::once("hi", 40);
        assert_eq!(c.next_delay(), Some(Duration::from_millis(40)));
        c.fire();
        c.fire();
        assert!(c.is_finished());
        assert_eq!(c.next_delay(), None);
        c.fire();
        assert_eq!(c.text(), "hi");
    }
}
