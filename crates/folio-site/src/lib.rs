//! Folio portfolio page.
//!
//! Dioxus components for the splash screen and the single-page portfolio,
//! backed by the state machines and content tables in `folio-core`.

pub mod components;
pub mod scroll;
pub mod settings;

/// Page stylesheet embedded at compile time.
pub const STYLES_CSS: &str = include_str!("../assets/styles.css");
