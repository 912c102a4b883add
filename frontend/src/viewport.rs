use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::config;
use crate::dom::Listener;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub fn from_width(width: f64) -> Breakpoint {
        if width < config::MOBILE_MAX_WIDTH {
            Breakpoint::Mobile
        } else if width < config::TABLET_MAX_WIDTH {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    /// Falls back to desktop when the window width cannot be read.
    pub fn current() -> Breakpoint {
        web_sys::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|width| width.as_f64())
            .map(Breakpoint::from_width)
            .unwrap_or(Breakpoint::Desktop)
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Desktop => "desktop",
        })
    }
}

/// Current breakpoint, re-evaluated once resizing has settled.
#[hook]
pub fn use_breakpoint() -> Breakpoint {
    let breakpoint = use_state(Breakpoint::current);

    {
        let breakpoint = breakpoint.clone();
        use_effect_with_deps(
            move |_| {
                let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                let listener = web_sys::window().and_then(|window| {
                    Listener::new(&window, "resize", move |_| {
                        let breakpoint = breakpoint.clone();
                        // replacing the handle cancels the previous timer
                        *pending.borrow_mut() = Some(Timeout::new(config::RESIZE_DEBOUNCE_MS, move || {
                            let current = Breakpoint::current();
                            debug!("current breakpoint: {}", current);
                            breakpoint.set(current);
                        }));
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }

    *breakpoint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_edges() {
        assert_eq!(Breakpoint::from_width(320.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(767.9), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(768.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(1023.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(1024.0), Breakpoint::Desktop);
    }

    #[test]
    fn test_breakpoint_names() {
        assert_eq!(Breakpoint::Tablet.to_string(), "tablet");
    }
}
