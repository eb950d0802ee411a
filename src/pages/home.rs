//! Home page: the loading screen, then every section of the site.

use dioxus::prelude::*;
use learnerspoint_core::Deadline;

use crate::components::{
    ContactSection, FeatureCards, Footer, Gallery, Hero, LoadingScreen, NavBar, Services,
};
use crate::context::use_site;
use crate::hooks::use_machine;

#[component]
pub fn Home() -> Element {
    let site = use_site();
    let done: Signal<Deadline> = use_machine(|| site.loading.timing.done_deadline());

    if !done.read().is_elapsed() {
        return rsx! { LoadingScreen {} };
    }

    rsx! {
        NavBar {}
        main {
            Hero {}
            Services {}
            FeatureCards {}
            Gallery {}
            ContactSection {}
        }
        Footer {}
    }
}
