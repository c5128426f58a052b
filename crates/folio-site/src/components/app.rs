//! Page shell: splash screen first, then the full page.

use dioxus::prelude::*;
use folio_core::NavState;

use crate::scroll::use_scroll_listener;
use crate::settings;

use super::{About, Contact, Footer, Hero, LoadingScreen, Navbar, Projects, Skills};

/// Root application component.
#[component]
pub fn App() -> Element {
    let config = use_hook(settings::current);

    let mut loading = use_signal(|| true);
    let nav = use_signal(|| NavState::new(config.nav));

    use_scroll_listener(nav);

    rsx! {
        div { class: "themed-root", "data-theme": "oxford",
            div { class: "page",
                if loading() {
                    LoadingScreen {
                        timings: config.loading,
                        on_complete: move |_| {
                            tracing::info!("Loading finished, showing page");
                            loading.set(false);
                        },
                    }
                } else {
                    Navbar { nav }
                    main {
                        Hero {}
                        About {}
                        Skills {}
                        Projects {}
                        Contact {}
                    }
                    Footer {}
                }
            }
        }
    }
}
