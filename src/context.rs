//! Shared context for the Learner's Point site.
//!
//! The shell provides these once; pages and sections read them through the
//! `use_*` hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! // In the Frame layout
//! use_context_provider(|| Signal::new(launch.theme));
//!
//! // In child components
//! let site = use_site();
//! let mut theme = use_theme();
//! theme.set(theme().toggled());
//! ```

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use learnerspoint_core::{NavKey, Receipts, SiteConfig};

/// Site content shared by every component. Read-only after launch.
pub type SharedSite = Arc<SiteConfig>;

/// Light or dark page theme.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, clap::ValueEnum)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Class applied to the shell's root element
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label of the toggle button (names the theme it switches to)
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }
}

/// Home page sections reachable from the nav bar.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Section {
    Home,
    Services,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Services,
        Section::About,
        Section::Contact,
    ];

    /// Element id of the section
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "service",
            Section::About => "card",
            Section::Contact => "contact",
        }
    }

    /// Nav bar label
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Services => "Services",
            Section::About => "About Us",
            Section::Contact => "Contact Us",
        }
    }
}

/// The shell's scroll container.
///
/// Visibility triggers measure against `root` and re-measure whenever
/// `scrolls` changes.
#[derive(Clone, Copy)]
pub struct Viewport {
    pub root: Signal<Option<Rc<MountedData>>>,
    pub scrolls: Signal<u64>,
}

/// Mounted section elements plus a scroll request waiting for its target.
#[derive(Clone, Copy)]
pub struct Anchors {
    pub mounted: Signal<HashMap<Section, Rc<MountedData>>>,
    pub pending: Signal<Option<Section>>,
}

impl Anchors {
    /// Ask for `section` to be scrolled into view as soon as it is mounted.
    pub fn request(mut self, section: Section) {
        self.pending.set(Some(section));
    }

    /// Record a mounted section element.
    pub fn register(mut self, section: Section, node: Rc<MountedData>) {
        self.mounted.write().insert(section, node);
    }

    /// Forget a section that is no longer rendered.
    pub fn unregister(mut self, section: Section) {
        self.mounted.write().remove(&section);
    }
}

/// Map a keyboard key onto a carousel key.
pub fn nav_key(key: &Key) -> Option<NavKey> {
    match key {
        Key::ArrowLeft => Some(NavKey::ArrowLeft),
        Key::ArrowRight => Some(NavKey::ArrowRight),
        Key::Home => Some(NavKey::Home),
        Key::End => Some(NavKey::End),
        Key::Escape => Some(NavKey::Escape),
        _ => None,
    }
}

/// One carousel key press. `seq` tells repeated presses of a key apart.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct KeyPress {
    pub seq: u64,
    pub key: NavKey,
}

impl KeyPress {
    pub fn after(previous: Option<KeyPress>, key: NavKey) -> Self {
        let seq = previous.map_or(1, |press| press.seq + 1);
        Self { seq, key }
    }
}

/// Carousel keys pressed anywhere on the page, fed by the shell root.
#[derive(Clone, Copy)]
pub struct PageKeys {
    pub last: Signal<Option<KeyPress>>,
}

impl PageKeys {
    pub fn press(mut self, key: NavKey) {
        let next = KeyPress::after(*self.last.peek(), key);
        self.last.set(Some(next));
    }
}

/// Hook to access the site content.
pub fn use_site() -> SharedSite {
    use_context::<SharedSite>()
}

/// Hook to access the page theme.
pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}

/// Hook to access the scroll viewport.
pub fn use_viewport() -> Viewport {
    use_context::<Viewport>()
}

/// Hook to access the count of relay-accepted submissions.
pub fn use_receipts() -> Signal<Receipts> {
    use_context::<Signal<Receipts>>()
}

/// Hook to access page-wide carousel key presses.
pub fn use_page_keys() -> PageKeys {
    use_context::<PageKeys>()
}

/// Hook to access the section anchors.
pub fn use_anchors() -> Anchors {
    use_context::<Anchors>()
}
