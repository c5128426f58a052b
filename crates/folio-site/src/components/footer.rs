use chrono::Datelike;
use dioxus::prelude::*;
use folio_core::PROFILE;

#[component]
pub fn Footer() -> Element {
    let line = PROFILE.copyright(chrono::Local::now().year());

    rsx! {
        footer { class: "site-footer",
            p { "{line}" }
        }
    }
}
