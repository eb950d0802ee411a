//! Viewport visibility triggers.
//!
//! A trigger watches how much of an element overlaps the viewport and flips a
//! flag once that overlap reaches a threshold. Entrance animations key off
//! the flag.

use std::time::Duration;

use crate::timer::Deadline;

/// A vertical extent in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub top: f64,
    pub height: f64,
}

impl Span {
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Fraction of `target` that lies inside `viewport`, in `[0, 1]`.
///
/// A zero-height target counts as fully visible when it sits inside the
/// viewport.
pub fn intersection_ratio(target: Span, viewport: Span) -> f64 {
    let top = target.top.max(viewport.top);
    let bottom = target.bottom().min(viewport.bottom());
    if target.height == 0.0 {
        return if target.top >= viewport.top && target.top <= viewport.bottom() {
            1.0
        } else {
            0.0
        };
    }
    ((bottom - top) / target.height).clamp(0.0, 1.0)
}

/// Trigger configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityOptions {
    /// Minimum ratio counted as visible
    pub threshold: f64,
    /// Stop observing after the first visible transition
    pub once: bool,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            once: true,
        }
    }
}

impl VisibilityOptions {
    pub fn once(threshold: f64) -> Self {
        Self {
            threshold,
            once: true,
        }
    }

    pub fn repeating(threshold: f64) -> Self {
        Self {
            threshold,
            once: false,
        }
    }
}

/// Boolean "is in view" flag driven by intersection observations.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityTrigger {
    options: VisibilityOptions,
    visible: bool,
    detached: bool,
}

impl VisibilityTrigger {
    pub fn new(options: VisibilityOptions) -> Self {
        Self {
            options,
            visible: false,
            detached: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// A `once` trigger detaches after its first visible transition.
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    pub fn options(&self) -> VisibilityOptions {
        self.options
    }

    /// Feed an intersection ratio. Returns true when the flag changed.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.detached {
            return false;
        }
        let before = self.visible;
        let intersecting = ratio > 0.0 && ratio >= self.options.threshold;
        if self.options.once {
            if intersecting {
                self.visible = true;
                self.detached = true;
            }
        } else {
            self.visible = intersecting;
        }
        self.visible != before
    }

    /// Convenience for `observe(intersection_ratio(target, viewport))`.
    pub fn observe_spans(&mut self, target: Span, viewport: Span) -> bool {
        self.observe(intersection_ratio(target, viewport))
    }
}

/// Entrance delay of the `index`-th item in a staggered group.
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step * index as u32
}

/// Deadline that reveals the `index`-th item once armed.
pub fn staggered_reveal(index: usize, step: Duration) -> Deadline {
    Deadline::idle(stagger_delay(index, step))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_of_partial_overlap() {
        let viewport = Span::new(0.0, 800.0);
        assert_eq!(intersection_ratio(Span::new(700.0, 200.0), viewport), 0.5);
        assert_eq!(intersection_ratio(Span::new(100.0, 200.0), viewport), 1.0);
        assert_eq!(intersection_ratio(Span::new(900.0, 200.0), viewport), 0.0);
        assert_eq!(intersection_ratio(Span::new(-150.0, 200.0), viewport), 0.25);
    }

    #[test]
    fn zero_height_target() {
        let viewport = Span::new(0.0, 800.0);
        assert_eq!(intersection_ratio(Span::new(10.0, 0.0), viewport), 1.0);
        assert_eq!(intersection_ratio(Span::new(810.0, 0.0), viewport), 0.0);
    }

    #[test]
    fn once_trigger_latches() {
        let mut trigger = VisibilityTrigger::new(VisibilityOptions::once(0.3));
        assert!(!trigger.observe(0.2));
        assert!(!trigger.is_visible());

        assert!(trigger.observe(0.5));
        assert!(trigger.is_visible());
        assert!(trigger.is_detached());

        assert!(!trigger.observe(0.0));
        assert!(!trigger.observe(1.0));
        assert!(trigger.is_visible());
    }

    #[test]
    fn repeating_trigger_follows_ratio() {
        let mut trigger = VisibilityTrigger::new(VisibilityOptions::repeating(0.1));
        assert!(trigger.observe(0.4));
        assert!(trigger.is_visible());
        assert!(trigger.observe(0.0));
        assert!(!trigger.is_visible());
        assert!(!trigger.observe(0.0));
        assert!(!trigger.is_detached());
    }

    #[test]
    fn never_observed_stays_hidden() {
        let trigger = VisibilityTrigger::new(VisibilityOptions::default());
        assert!(!trigger.is_visible());
    }

    #[test]
    fn stagger() {
        let step = Duration::from_millis(200);
        assert_eq!(stagger_delay(0, step), Duration::ZERO);
        assert_eq!(stagger_delay(3, step), Duration::from_millis(600));
        assert!(!staggered_reveal(2, step).is_pending());
    }
}
