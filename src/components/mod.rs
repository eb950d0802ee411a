//! Page sections and forms for the Learner's Point site.
//!
//! Sections read their content from the shared [`SiteConfig`](learnerspoint_core::SiteConfig)
//! context; generic widgets come from `learnerspoint_ui`.

mod contact_section;
mod feature_cards;
mod footer;
mod gallery;
mod hero;
mod info_card;
mod loading_screen;
mod nav_bar;
mod relay_form;
mod services;

pub use contact_section::ContactSection;
pub use feature_cards::FeatureCards;
pub use footer::{copyright_year, Footer};
pub use gallery::Gallery;
pub use hero::Hero;
pub use loading_screen::LoadingScreen;
pub use nav_bar::NavBar;
pub use relay_form::{PaymentPanel, RelayForm};
pub use services::Services;
