//! Loading Screen
//!
//! Splash shown while the home page's "done" deadline runs: an eased
//! progress bar and rotating status messages. Both timers stop when the
//! screen unmounts.

use std::time::Duration;

use dioxus::prelude::*;
use learnerspoint_core::ProgressMeter;
use learnerspoint_ui::ProgressBar;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::context::use_site;
use crate::hooks::use_machine;

#[component]
pub fn LoadingScreen() -> Element {
    let site = use_site();
    let loading = &site.loading;

    let meter = use_machine(|| {
        ProgressMeter::new(
            StdRng::from_os_rng(),
            Duration::from_millis(loading.timing.tick_ms),
        )
    });
    let messages = use_machine(|| loading.timing.message_rotator(loading.messages.len()));

    let percent = meter.read().percent();
    let shown = meter.read().display_percent();
    let message = messages
        .read()
        .pick(&loading.messages)
        .cloned()
        .unwrap_or_default();

    rsx! {
        div { class: "loading-screen", role: "status", "aria-live": "polite",
            img { class: "loading-logo", src: "{site.brand.logo}", alt: "{site.brand.name}" }
            div { class: "loading-brand", "{site.brand.name}" }
            div { class: "loading-bar",
                ProgressBar { value: percent }
            }
            div { class: "loading-percent", "{shown}%" }
            div { class: "loading-message", "{message}" }
        }
    }
}
