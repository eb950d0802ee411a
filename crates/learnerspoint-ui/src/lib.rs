//! Learner's Point UI Components
//!
//! Dioxus building blocks shared by every page of the site: buttons, form
//! fields, notices and progress bars.
//!
//! ## Look and Feel
//!
//! - **Blue (#2563EB)**: primary actions, links, the brand accent
//! - **Slate (#0F172A)**: headings and dark-mode backgrounds
//! - **Green (#16A34A)**: success notices
//! - **Red (#DC2626)**: validation and relay errors
//!
//! Components only emit class names; the stylesheet lives with the app.

pub mod components;

pub use components::*;
