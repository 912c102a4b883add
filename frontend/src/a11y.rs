use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::animations::motion::prefers_reduced_motion;
use crate::dom::{self, Listener};

pub const MAIN_CONTENT_ID: &str = "main-content";

const SKIP_LINK_HIDDEN_TOP: &str = "-40px";
const SKIP_LINK_VISIBLE_TOP: &str = "6px";

/// First focusable element on the page; parked off-screen until focused.
#[function_component(SkipLink)]
pub fn skip_link() -> Html {
    let focused = use_state(|| false);

    let onfocus = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(true))
    };
    let onblur = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(false))
    };

    let top = if *focused {
        SKIP_LINK_VISIBLE_TOP
    } else {
        SKIP_LINK_HIDDEN_TOP
    };

    html! {
        <a
            href={format!("#{}", MAIN_CONTENT_ID)}
            class={classes!("skip-link", (!*focused).then(|| "sr-only"))}
            style={format!("top: {};", top)}
            {onfocus}
            {onblur}
        >
            {"Skip to main content"}
        </a>
    }
}

/// Interactive elements the page relies on being reachable by Tab.
pub fn needs_tabindex(tag_name: &str, has_tabindex: bool) -> bool {
    !has_tabindex && matches!(tag_name.to_ascii_uppercase().as_str(), "A" | "BUTTON")
}

pub fn ensure_keyboard_access() {
    for element in dom::query_all("a, button, input, textarea, select") {
        if needs_tabindex(&element.tag_name(), element.has_attribute("tabindex")) {
            let _ = element.set_attribute("tabindex", "0");
        }
    }
}

/// Fragment id for same-page anchors, `None` for a bare `#`.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty()).map(|_| href)
}

/// Smooth-scrolls same-page anchors and moves focus to the target. Unknown
/// targets fall through to the browser default.
pub fn install_smooth_scroll() -> Vec<Listener> {
    let behavior = if prefers_reduced_motion() {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    };

    dom::query_all(r##"a[href^="#"]"##)
        .into_iter()
        .filter_map(|link| {
            let anchor = link.clone();
            Listener::new(&link, "click", move |event| {
                let Some(href) = anchor.get_attribute("href") else {
                    return;
                };
                let Some(target) = fragment_target(&href).and_then(dom::query) else {
                    return;
                };
                event.prevent_default();

                let options = ScrollIntoViewOptions::new();
                options.set_behavior(behavior);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);

                if let Some(target) = target.dyn_ref::<HtmlElement>() {
                    let _ = target.focus();
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_links_and_buttons_get_tabindex() {
        assert!(needs_tabindex("A", false));
        assert!(needs_tabindex("button", false));
        assert!(!needs_tabindex("A", true));
        assert!(!needs_tabindex("INPUT", false));
        assert!(!needs_tabindex("TEXTAREA", false));
        assert!(!needs_tabindex("SELECT", false));
    }

    #[test]
    fn test_fragment_target() {
        assert_eq!(fragment_target("#services"), Some("#services"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("/pricing"), None);
    }
}
