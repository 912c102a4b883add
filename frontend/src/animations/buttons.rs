use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, MouseEvent};

use crate::animations::motion::prefers_reduced_motion;
use crate::animations::reveal::Easing;
use crate::config;
use crate::dom::{self, Listener};

pub const BUTTON_SELECTOR: &str = ".btn";

/// Square ripple placed so its centre sits under the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

impl Ripple {
    pub fn for_click(left: f64, top: f64, width: f64, height: f64, client_x: f64, client_y: f64) -> Ripple {
        let size = width.max(height);
        Ripple {
            size,
            x: client_x - left - size / 2.0,
            y: client_y - top - size / 2.0,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; left: {x}px; top: {y}px; \
             background: rgba(255, 255, 255, 0.3); border-radius: 50%; transform: scale(0); \
             animation: ripple 0.6s linear; pointer-events: none;",
            size = self.size,
            x = self.x,
            y = self.y,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverStyle {
    pub transform: &'static str,
    pub box_shadow: &'static str,
}

pub fn hover_style(hovering: bool) -> HoverStyle {
    if hovering {
        HoverStyle {
            transform: "translateY(-2px)",
            box_shadow: "0 4px 12px rgba(0, 0, 0, 0.15)",
        }
    } else {
        HoverStyle {
            transform: "translateY(0)",
            box_shadow: "none",
        }
    }
}

/// Enter and Space activate a `.btn` the same way a click does.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Native buttons already click on Enter and Space.
pub fn needs_key_activation(tag_name: &str) -> bool {
    !tag_name.eq_ignore_ascii_case("button")
}

fn spawn_ripple(button: &Element, event: &MouseEvent) {
    let Some(document) = dom::document() else {
        return;
    };
    let Ok(ripple) = document.create_element("span") else {
        return;
    };
    let rect = button.get_bounding_client_rect();
    let geometry = Ripple::for_click(
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
        event.client_x() as f64,
        event.client_y() as f64,
    );
    let _ = ripple.set_attribute("style", &geometry.css());
    let _ = ripple.set_attribute("aria-hidden", "true");

    dom::set_style(button, "position", "relative");
    dom::set_style(button, "overflow", "hidden");
    if button.append_child(&ripple).is_ok() {
        Timeout::new(config::RIPPLE_LIFETIME_MS, move || ripple.remove()).forget();
    }
}

fn apply_hover(button: &Element, hovering: bool) {
    let style = hover_style(hovering);
    dom::set_style(
        button,
        "transition",
        &format!("transform 0.2s {0}, box-shadow 0.2s {0}", Easing::EaseInOut.css()),
    );
    dom::set_style(button, "transform", style.transform);
    dom::set_style(button, "box-shadow", style.box_shadow);
}

/// Keyboard activation is always wired; ripple and hover only when motion is
/// allowed.
pub fn install_button_effects() -> Vec<Listener> {
    let animate = !prefers_reduced_motion();
    let mut listeners = Vec::new();

    for button in dom::query_all(BUTTON_SELECTOR) {
        if needs_key_activation(&button.tag_name()) {
            let target = button.clone();
            listeners.extend(Listener::new(&button, "keydown", move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if !is_activation_key(&event.key()) {
                    return;
                }
                event.prevent_default();
                if let Some(html) = target.dyn_ref::<HtmlElement>() {
                    html.click();
                }
            }));
        }

        let target = button.clone();
        listeners.extend(Listener::new(&button, "click", move |event| {
            debug!("button clicked: {}", target.text_content().unwrap_or_default().trim());
            if !animate {
                return;
            }
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                spawn_ripple(&target, event);
            }
        }));

        if animate {
            let target = button.clone();
            listeners.extend(Listener::new(&button, "mouseenter", move |_| {
                apply_hover(&target, true);
            }));
            let target = button.clone();
            listeners.extend(Listener::new(&button, "mouseleave", move |_| {
                apply_hover(&target, false);
            }));
        }
    }

    debug!("wired {} button listeners", listeners.len());
    listeners
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ripple_centres_on_pointer() {
        let ripple = Ripple::for_click(100.0, 50.0, 200.0, 40.0, 150.0, 70.0);
        assert_eq!(ripple.size, 200.0);
        assert_eq!(ripple.x, -50.0);
        assert_eq!(ripple.y, -80.0);
    }

    #[test]
    fn test_ripple_uses_larger_side() {
        let ripple = Ripple::for_click(0.0, 0.0, 40.0, 120.0, 20.0, 60.0);
        assert_eq!(ripple.size, 120.0);
        assert_eq!((ripple.x, ripple.y), (-40.0, 0.0));
        assert!(ripple.css().contains("width: 120px; height: 120px;"));
        assert!(ripple.css().contains("animation: ripple 0.6s linear;"));
    }

    #[test]
    fn test_hover_style_round_trip() {
        assert_eq!(hover_style(true).transform, "translateY(-2px)");
        assert_eq!(hover_style(false).box_shadow, "none");
    }

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
    }

    #[test]
    fn test_native_buttons_keep_their_own_activation() {
        assert!(!needs_key_activation("BUTTON"));
        assert!(!needs_key_activation("button"));
        assert!(needs_key_activation("A"));
        assert!(needs_key_activation("DIV"));
    }
}
