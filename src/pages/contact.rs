//! Standalone contact page.

use dioxus::prelude::*;
use learnerspoint_core::is_success_redirect;

use crate::components::{ContactSection, Footer, NavBar};

/// `/Contact`, optionally with the relay's `success=true` marker.
#[component]
pub fn ContactPage(query: String) -> Element {
    let submitted = is_success_redirect(&query);

    rsx! {
        NavBar {}
        main { class: "contact-page",
            ContactSection { submitted }
        }
        Footer {}
    }
}
