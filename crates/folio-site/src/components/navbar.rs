//! Fixed header with desktop links and the mobile menu overlay.

use dioxus::prelude::*;
use folio_core::{NavState, NAV_LINKS, PROFILE};

use crate::scroll::scroll_to;

/// Fixed header; switches style once the page is scrolled.
#[component]
pub fn Navbar(mut nav: Signal<NavState>) -> Element {
    let state = *nav.read();

    rsx! {
        header { class: "{state.header_class()}",
            nav { class: "nav-bar",
                div { class: "nav-brand",
                    img { class: "nav-logo", src: PROFILE.logo, alt: "Logo" }
                    h1 { class: "nav-title",
                        span { "{PROFILE.brand}" }
                    }
                }

                ul { class: "nav-links",
                    for link in NAV_LINKS.iter() {
                        li { key: "{link.label}",
                            a {
                                href: link.target.href(),
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    scroll_to(link.target);
                                },
                                "{link.label}"
                            }
                        }
                    }
                }

                button {
                    class: "nav-toggle",
                    "aria-label": "Toggle menu",
                    onclick: move |_| nav.write().toggle_menu(),
                    "{state.menu_glyph()}"
                }
            }

            if state.is_menu_open() {
                div { class: "mobile-menu",
                    for link in NAV_LINKS.iter() {
                        a {
                            key: "{link.label}",
                            href: link.target.href(),
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                nav.write().close_menu();
                                scroll_to(link.target);
                            },
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}
