use dioxus::prelude::*;
use folio_core::{Section, SOCIAL_LINKS};

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { id: Section::Contact.anchor(), class: "section contact",
            h1 { class: "section-title", "Get in Touch" }
            div { class: "section-rule" }

            div { class: "contact-links fade-up",
                for link in SOCIAL_LINKS.iter() {
                    a {
                        key: "{link.href}",
                        class: link.kind.css_class(),
                        href: link.href,
                        target: link.target(),
                        rel: "noopener noreferrer",
                        span { class: "contact-glyph", "{link.kind.glyph()}" }
                        span { "{link.label}" }
                    }
                }
            }
        }
    }
}
