//! About section with profile photo and highlight badges.

use dioxus::prelude::*;
use folio_core::{Section, PROFILE};

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: Section::About.anchor(), class: "section about",
            div { class: "section-inner fade-up",
                h1 { class: "section-title", "About Me" }
                div { class: "section-rule" }

                div { class: "about-body",
                    img { class: "about-photo", src: PROFILE.about_photo, alt: PROFILE.name }
                    div { class: "about-copy fade-right",
                        p {
                            "Hi, I'm "
                            span { class: "highlight", "{PROFILE.name}" }
                            ", a passionate tech enthusiast pursuing a "
                            b { "{PROFILE.degree}" }
                            " from "
                            b { "{PROFILE.institution}" }
                            ". I specialize in "
                            span { class: "highlight", "{PROFILE.focus}" }
                            ". {PROFILE.mission}"
                        }
                        div { class: "badges",
                            for badge in PROFILE.badges.iter() {
                                div { key: "{badge.label}", class: badge.accent, "{badge.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
