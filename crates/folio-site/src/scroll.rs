//! Window scroll listener and in-page anchor navigation.

use dioxus::prelude::*;
use folio_core::{NavState, Section};

/// Forwards `window.scrollY` on every scroll event, plus once on registration.
const LISTEN_JS: &str = r#"
    const forward = () => dioxus.send(window.scrollY);
    window.__folioScroll = forward;
    window.addEventListener('scroll', forward, { passive: true });
    forward();
"#;

const UNLISTEN_JS: &str = r#"
    if (window.__folioScroll) {
        window.removeEventListener('scroll', window.__folioScroll);
        delete window.__folioScroll;
    }
"#;

/// Script that smoothly scrolls `section` into view.
pub fn scroll_into_view_js(section: Section) -> String {
    format!(
        "document.getElementById('{}')?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});",
        section.anchor()
    )
}

pub fn scroll_to(section: Section) {
    document::eval(&scroll_into_view_js(section));
}

/// Register the window scroll listener for the lifetime of the calling component.
///
/// `nav` is only written when the scrolled flag actually flips.
pub fn use_scroll_listener(mut nav: Signal<NavState>) {
    use_future(move || async move {
        let mut listener = document::eval(LISTEN_JS);
        tracing::debug!("Scroll listener registered");

        while let Ok(offset) = listener.recv::<f64>().await {
            let mut next = *nav.peek();
            if next.on_scroll(offset) {
                tracing::trace!(offset, scrolled = next.is_scrolled(), "Header style changed");
                nav.set(next);
            }
        }
    });

    use_drop(|| {
        document::eval(UNLISTEN_JS);
        tracing::debug!("Scroll listener removed");
    });
}
