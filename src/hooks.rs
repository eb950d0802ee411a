//! Hooks binding core state machines to Dioxus.
//!
//! - [`use_machine`] keeps a [`TimedMachine`] in a signal and runs its timer
//!   as a component-scoped task, restarting the task whenever the machine's
//!   epoch changes.
//! - [`use_visibility`] measures an element against the shell's scroll root
//!   and feeds the result into a [`VisibilityTrigger`].
//! - [`use_staggered_reveal`] combines the two for card entrance delays.
//! - [`use_success_banner`] shows the post-submission banner, once per
//!   accepted submission.
//! - [`use_section_anchor`] registers nav bar scroll targets.

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use learnerspoint_core::timer::{drive, DeadlinePhase, Step};
use learnerspoint_core::visibility::{staggered_reveal, Span};
use learnerspoint_core::{Deadline, TimedMachine, VisibilityOptions, VisibilityTrigger};

use crate::context::{use_anchors, use_receipts, use_viewport, Section};

/// Hold `init()` in a signal and drive its timer while the component lives.
///
/// The returned signal may be mutated freely by event handlers. A mutation
/// that changes [`TimedMachine::epoch`] cancels the pending timer and starts
/// a fresh one from now.
pub fn use_machine<M: TimedMachine + 'static>(init: impl FnOnce() -> M) -> Signal<M> {
    let mut machine = use_signal(init);
    let epoch = use_memo(move || machine.read().epoch());
    let mut task: Signal<Option<Task>> = use_signal(|| None);

    use_effect(move || {
        let _ = epoch();
        if let Some(previous) = task.take() {
            previous.cancel();
        }
        let running = spawn(async move {
            drive(move |step: Step<M>| step(&mut *machine.write())).await;
        });
        task.set(Some(running));
    });

    machine
}

/// A visibility flag for one element.
#[derive(Clone, Copy)]
pub struct Visibility {
    trigger: Signal<VisibilityTrigger>,
    node: Signal<Option<Rc<MountedData>>>,
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        self.trigger.read().is_visible()
    }

    /// `onmounted` handler for the observed element.
    pub fn track(self) -> impl FnMut(MountedEvent) {
        let mut node = self.node;
        move |event: MountedEvent| node.set(Some(event.data()))
    }
}

/// Watch an element's intersection with the viewport.
///
/// Until the element is mounted (and if it never is) the flag stays false.
pub fn use_visibility(options: VisibilityOptions) -> Visibility {
    let mut trigger = use_signal(|| VisibilityTrigger::new(options));
    let node: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let viewport = use_viewport();

    use_effect(move || {
        let _ = (viewport.scrolls)();
        let Some(target) = node() else {
            return;
        };
        if trigger.peek().is_detached() {
            return;
        }
        let root = (viewport.root)();

        spawn(async move {
            let Ok(rect) = target.get_client_rect().await else {
                return;
            };
            let view = match root {
                Some(root) => match root.get_client_rect().await {
                    Ok(view) => Span::new(view.origin.y, view.size.height),
                    Err(e) => {
                        tracing::debug!(error = ?e, "Viewport measurement failed");
                        return;
                    }
                },
                None => return,
            };

            let mut next = trigger.peek().clone();
            if next.observe_spans(Span::new(rect.origin.y, rect.size.height), view) {
                trigger.set(next);
            }
        });
    });

    Visibility { trigger, node }
}

/// Entrance reveal for the `index`-th item of a staggered group.
///
/// Returns the item's visibility (for `onmounted`) and whether it has been
/// revealed. The reveal timer starts the first time the item becomes visible.
pub fn use_staggered_reveal(
    index: usize,
    step: Duration,
    options: VisibilityOptions,
) -> (Visibility, bool) {
    let visibility = use_visibility(options);
    let mut reveal: Signal<Deadline> = use_machine(move || staggered_reveal(index, step));

    use_effect(move || {
        if visibility.is_visible() && reveal.peek().phase() == DeadlinePhase::Idle {
            reveal.write().arm();
        }
    });

    let revealed = reveal.read().is_elapsed();
    (visibility, revealed)
}

/// Confirmation banner shown for `after` when the page is opened with the
/// success marker (`submitted`) and again after every submission the relay
/// accepts while the page is up.
pub fn use_success_banner(submitted: bool, after: Duration) -> Signal<Deadline> {
    let mut banner = use_machine(move || Deadline::idle(after));
    let receipts = use_receipts();
    let mut seen = use_signal(|| receipts.peek().count());

    use_effect(use_reactive((&submitted,), move |(submitted,)| {
        if submitted {
            banner.write().arm();
        }
    }));

    // Same route, same query: only the count tells a repeat submission apart
    use_effect(move || {
        let fresh = receipts.read().take_new(&mut *seen.write());
        if fresh {
            banner.write().arm();
        }
    });

    banner
}

/// `onmounted` handler registering the element as `section`'s scroll target.
pub fn use_section_anchor(section: Section) -> impl FnMut(MountedEvent) {
    let anchors = use_anchors();
    use_drop(move || anchors.unregister(section));
    move |event: MountedEvent| anchors.register(section, event.data())
}
