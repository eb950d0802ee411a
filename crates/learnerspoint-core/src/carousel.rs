//! Image carousel controller.
//!
//! Holds the current slide and the direction of the last transition. All
//! navigation funnels through [`Carousel::go_to`], which wraps out-of-range
//! indices so the current index is always valid.

use std::time::Duration;

use crate::error::{SiteError, SiteResult};
use crate::timer::TimedMachine;

/// Default auto-advance interval
pub const AUTO_ADVANCE: Duration = Duration::from_millis(5000);

/// Horizontal drag distance (px) a swipe must exceed to change slides
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Direction of the last slide transition. Only picks the slide-in offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    Backward,
    #[default]
    None,
    Forward,
}

impl Direction {
    /// -1, 0 or +1
    pub fn sign(self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::None => 0,
            Direction::Forward => 1,
        }
    }

    /// CSS class selecting the slide-in animation
    pub fn class(self) -> &'static str {
        match self {
            Direction::Backward => "slide-from-left",
            Direction::None => "slide-still",
            Direction::Forward => "slide-from-right",
        }
    }
}

/// Keys the carousel responds to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Escape,
}

/// Slide carousel with wrap-around navigation and auto-advance.
#[derive(Clone, Debug, PartialEq)]
pub struct Carousel<T> {
    items: Vec<T>,
    current: usize,
    direction: Direction,
    transitions: u64,
    fullscreen: bool,
    interval: Duration,
}

impl<T> Carousel<T> {
    /// Create a carousel. Fails when `items` is empty.
    pub fn new(items: Vec<T>) -> SiteResult<Self> {
        if items.is_empty() {
            return Err(SiteError::EmptyCarousel);
        }
        Ok(Self {
            items,
            current: 0,
            direction: Direction::None,
            transitions: 0,
            fullscreen: false,
            interval: AUTO_ADVANCE,
        })
    }

    /// Override the auto-advance interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_item(&self) -> &T {
        &self.items[self.current]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Number of index changes so far
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    /// "3 / 6"
    pub fn counter(&self) -> String {
        format!("{} / {}", self.current + 1, self.items.len())
    }

    /// Jump to `index`, wrapping: negative selects the last item, past-the-end
    /// selects the first.
    pub fn go_to(&mut self, index: isize) {
        let len = self.items.len() as isize;
        let target = if index < 0 {
            len - 1
        } else if index >= len {
            0
        } else {
            index
        } as usize;
        if target == self.current {
            return;
        }

        self.direction = if target > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.transitions += 1;
        self.current = target;
    }

    pub fn next(&mut self) {
        self.go_to(self.current as isize + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.current as isize - 1);
    }

    pub fn first(&mut self) {
        self.go_to(0);
    }

    pub fn last(&mut self) {
        self.go_to(self.items.len() as isize - 1);
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    /// Apply a key press. Returns whether the key was handled.
    pub fn handle_key(&mut self, key: NavKey) -> bool {
        match key {
            NavKey::ArrowLeft => self.prev(),
            NavKey::ArrowRight => self.next(),
            NavKey::Home => self.first(),
            NavKey::End => self.last(),
            NavKey::Escape if self.fullscreen => self.fullscreen = false,
            NavKey::Escape => return false,
        }
        true
    }

    /// Apply the outcome of a finished swipe gesture.
    pub fn apply_swipe(&mut self, swipe: SwipeOutcome) {
        match swipe {
            SwipeOutcome::Next => self.next(),
            SwipeOutcome::Prev => self.prev(),
            SwipeOutcome::Ignored => {}
        }
    }
}

impl<T> TimedMachine for Carousel<T> {
    fn next_delay(&self) -> Option<Duration> {
        (self.items.len() > 1).then_some(self.interval)
    }

    fn fire(&mut self) {
        self.next();
    }

    fn epoch(&self) -> u64 {
        self.transitions
    }
}

/// Result of a finished drag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    Next,
    Prev,
    Ignored,
}

/// Tracks a horizontal touch or mouse drag.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SwipeGesture {
    start_x: Option<f64>,
}

impl SwipeGesture {
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    pub fn is_dragging(&self) -> bool {
        self.start_x.is_some()
    }

    /// Finish the drag at `x`. Leftward drags past the threshold go to the
    /// next slide, rightward ones to the previous slide.
    pub fn end(&mut self, x: f64) -> SwipeOutcome {
        let Some(start) = self.start_x.take() else {
            return SwipeOutcome::Ignored;
        };
        classify_swipe(start - x)
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

/// Classify a drag by `start_x - end_x`.
pub fn classify_swipe(delta: f64) -> SwipeOutcome {
    if delta.abs() <= SWIPE_THRESHOLD_PX {
        SwipeOutcome::Ignored
    } else if delta > 0.0 {
        SwipeOutcome::Next
    } else {
        SwipeOutcome::Prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(n: usize) -> Carousel<usize> {
        Carousel::new((0..n).collect()).unwrap()
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            Carousel::<u8>::new(Vec::new()),
            Err(SiteError::EmptyCarousel)
        ));
    }

    #[test]
    fn go_to_wraps_both_ends() {
        let mut c = carousel(6);
        c.go_to(-1);
        assert_eq!(c.current(), 5);
        c.go_to(6);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn direction_follows_wrapped_index() {
        let mut c = carousel(3);
        c.next();
        assert_eq!(c.direction(), Direction::Forward);
        c.prev();
        assert_eq!(c.direction(), Direction::Backward);
        // Wrapping backwards lands on a larger index
        c.prev();
        assert_eq!(c.current(), 2);
        assert_eq!(c.direction(), Direction::Forward);
        // Wrapping forwards lands on a smaller index
        c.next();
        assert_eq!(c.current(), 0);
        assert_eq!(c.direction(), Direction::Backward);
    }

    #[test]
    fn staying_put_keeps_the_direction() {
        let mut c = carousel(4);
        c.next();
        c.go_to(1);
        assert_eq!(c.direction(), Direction::Forward);
        assert_eq!(c.transitions(), 1);

        let mut single = carousel(1);
        single.next();
        assert_eq!(single.direction(), Direction::None);
    }

    #[test]
    fn keys_navigate() {
        let mut c = carousel(4);
        assert!(c.handle_key(NavKey::End));
        assert_eq!(c.current(), 3);
        assert!(c.handle_key(NavKey::Home));
        assert_eq!(c.current(), 0);
        assert!(c.handle_key(NavKey::ArrowLeft));
        assert_eq!(c.current(), 3);
        assert!(c.handle_key(NavKey::ArrowRight));
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn escape_only_leaves_fullscreen() {
        let mut c = carousel(2);
        assert!(!c.handle_key(NavKey::Escape));
        c.toggle_fullscreen();
        assert!(c.handle_key(NavKey::Escape));
        assert!(!c.is_fullscreen());
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn swipe_threshold() {
        assert_eq!(classify_swipe(50.0), SwipeOutcome::Ignored);
        assert_eq!(classify_swipe(-50.0), SwipeOutcome::Ignored);
        assert_eq!(classify_swipe(50.5), SwipeOutcome::Next);
        assert_eq!(classify_swipe(-80.0), SwipeOutcome::Prev);
    }

    #[test]
    fn gesture_needs_a_start() {
        let mut g = SwipeGesture::default();
        assert_eq!(g.end(0.0), SwipeOutcome::Ignored);

        g.begin(300.0);
        assert!(g.is_dragging());
        assert_eq!(g.end(200.0), SwipeOutcome::Next);
        assert!(!g.is_dragging());
    }

    #[test]
    fn auto_advance_rearms_on_transition() {
        let mut c = carousel(3);
        assert_eq!(c.next_delay(), Some(AUTO_ADVANCE));
        let before = c.epoch();
        c.fire();
        assert_eq!(c.current(), 1);
        assert_ne!(c.epoch(), before);
    }

    #[test]
    fn single_slide_never_advances() {
        let c = carousel(1);
        assert_eq!(c.next_delay(), None);
        assert_eq!(c.counter(), "1 / 1");
    }
}
