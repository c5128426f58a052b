use dioxus::prelude::*;
use folio_core::{Section, PROFILE};

#[component]
pub fn Hero() -> Element {
    let greeting = PROFILE.greeting();

    rsx! {
        section { id: Section::Home.anchor(), class: "hero",
            div { class: "hero-text fade-left",
                h1 { "{greeting}" }
            }
            div { class: "hero-portrait zoom-in",
                img { src: PROFILE.portrait, alt: "Profile" }
            }
        }
    }
}
