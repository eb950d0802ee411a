use std::collections::HashMap;

use dioxus::prelude::*;
use learnerspoint_core::Receipts;

use crate::context::{
    nav_key, use_anchors, use_page_keys, use_theme, use_viewport, Anchors, PageKeys, Viewport,
};
use crate::pages::{ContactPage, Enroll, Home};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Loading screen, then the single-page home sections
/// - `/enroll` - Enrollment and payment forms (`?success=true` after a submission)
/// - `/Contact` - Standalone contact page
/// - anything else - Replaced by `/`
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Frame)]
        #[route("/")]
        Home {},
        #[route("/enroll?:..query")]
        Enroll { query: String },
        #[route("/Contact?:..query")]
        ContactPage { query: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, site content, theme, viewport and routing.
#[component]
pub fn App() -> Element {
    let launch = use_hook(crate::launch_options);

    use_context_provider(|| launch.site.clone());
    use_context_provider(|| Signal::new(launch.theme));
    use_context_provider(|| Signal::new(Receipts::default()));
    use_context_provider(|| Viewport {
        root: Signal::new(None),
        scrolls: Signal::new(0),
    });
    use_context_provider(|| PageKeys {
        last: Signal::new(None),
    });
    use_context_provider(|| Anchors {
        mounted: Signal::new(HashMap::new()),
        pending: Signal::new(None),
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Shell layout shared by every page.
///
/// Owns the scroll container visibility triggers measure against, applies the
/// theme class, scrolls to a requested section once it is mounted, and
/// forwards carousel keys pressed anywhere on the page.
#[component]
fn Frame() -> Element {
    let theme = use_theme();
    let mut viewport = use_viewport();
    let mut anchors = use_anchors();
    let keys = use_page_keys();
    let route = use_route::<Route>();

    // Honour --route once the router is up. The layout wraps every route, so
    // this runs a single time.
    use_effect(move || {
        let start = crate::launch_options().route;
        if start == "/" {
            return;
        }
        match start.parse::<Route>() {
            Ok(target) => {
                navigator().replace(target);
            }
            Err(e) => tracing::warn!(route = %start, error = %e, "Ignoring unknown start route"),
        }
    });

    use_effect(use_reactive((&route,), |(route,)| {
        tracing::info!(%route, "Route changed");
    }));

    use_effect(move || {
        let Some(section) = (anchors.pending)() else {
            return;
        };
        let Some(node) = anchors.mounted.read().get(&section).cloned() else {
            return;
        };
        anchors.pending.set(None);
        spawn(async move {
            if let Err(e) = node.scroll_to(ScrollBehavior::Smooth).await {
                tracing::warn!(section = section.anchor(), error = ?e, "Failed to scroll to section");
            }
        });
    });

    rsx! {
        div {
            class: "site-root {theme().class()}",
            tabindex: "-1",
            onmounted: move |e: MountedEvent| {
                let node = e.data();
                viewport.root.set(Some(node.clone()));
                // Focus the root so carousel keys work before anything is clicked
                async move {
                    if let Err(e) = node.set_focus(true).await {
                        tracing::debug!(error = ?e, "Could not focus the page root");
                    }
                }
            },
            onkeydown: move |e: KeyboardEvent| {
                if let Some(key) = nav_key(&e.key()) {
                    keys.press(key);
                }
            },
            onscroll: move |_| *viewport.scrolls.write() += 1,
            Outlet::<Route> {}
        }
    }
}

/// Unknown paths go back home.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    use_effect(move || {
        tracing::warn!(path = %segments.join("/"), "Unknown route, redirecting home");
        navigator().replace(Route::Home {});
    });

    rsx! {}
}
