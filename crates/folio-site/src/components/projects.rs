//! Project cards.

use dioxus::prelude::*;
use folio_core::{ProjectMedia, Section, PROJECTS};

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { id: Section::Projects.anchor(), class: "section projects",
            h1 { class: "section-title", "Projects" }
            div { class: "section-rule" }
            p { class: "section-lead", "Here are some of my recent projects:" }

            div { class: "project-list fade-up",
                for project in PROJECTS.iter() {
                    div { key: "{project.title}", class: "project-card",
                        {
                            match project.media {
                                ProjectMedia::Image(src) => rsx! {
                                    img { class: "project-media", src: src, alt: project.title }
                                },
                                ProjectMedia::Glyph(glyph) => rsx! {
                                    div { class: "project-media {glyph.css_class()}", "{glyph.symbol()}" }
                                },
                            }
                        }
                        h2 { "{project.title}" }
                        p { class: "project-tech", "{project.tech}" }
                        p { class: "project-desc", "{project.description}" }
                        div { class: "project-actions",
                            a { class: "btn btn-live", href: project.live, "View Live" }
                            a { class: "btn btn-repo", href: project.repo, "GitHub" }
                        }
                    }
                }
            }
        }
    }
}
