use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::animations::motion::prefers_reduced_motion;
use crate::animations::reveal::{
    IntersectionEntry, ObserverOptions, RevealController, RevealHost, RevealNode,
    VisibilityObserver,
};
use crate::dom;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

impl RevealNode for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn data(&self, key: &str) -> Option<String> {
        self.get_attribute(&format!("data-{}", key))
    }

    fn set_style(&self, property: &str, value: &str) {
        dom::set_style(self, property, value);
    }
}

impl VisibilityObserver<Element> for IntersectionObserver {
    fn observe(&self, node: &Element) {
        IntersectionObserver::observe(self, node);
    }

    fn unobserve(&self, node: &Element) {
        IntersectionObserver::unobserve(self, node);
    }
}

pub struct BrowserHost;

impl BrowserHost {
    pub fn current() -> Option<BrowserHost> {
        dom::document().map(|_| BrowserHost)
    }
}

impl RevealHost for BrowserHost {
    type Node = Element;

    fn prefers_reduced_motion(&self) -> bool {
        prefers_reduced_motion()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        dom::query_all(selector)
    }
}

/// Live scroll-reveal wiring. Dropping it disconnects the observer, which
/// leaves every revealed element in its final state.
pub struct ScrollReveal {
    controller: Rc<RefCell<RevealController<Element>>>,
    observer: Option<IntersectionObserver>,
    _callback: Option<ObserverCallback>,
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
            debug!(
                "scroll reveal stopped, {} elements never revealed",
                self.controller.borrow().pending()
            );
        }
    }
}

pub fn install_scroll_reveal() -> ScrollReveal {
    let controller = Rc::new(RefCell::new(RevealController::new()));
    let Some(host) = BrowserHost::current() else {
        return ScrollReveal {
            controller,
            observer: None,
            _callback: None,
        };
    };

    let callback: ObserverCallback = {
        let controller = controller.clone();
        Closure::new(move |entries: Array, observer: IntersectionObserver| {
            let entries = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| IntersectionEntry {
                    target: entry.target(),
                    is_intersecting: entry.is_intersecting(),
                });
            controller.borrow_mut().handle_entries(entries, &observer);
        })
    };

    let observer = controller
        .borrow_mut()
        .start(&host, |options| create_observer(&callback, options));
    debug!(
        "scroll reveal {:?}, {} elements",
        controller.borrow().phase(),
        controller.borrow().watched()
    );

    ScrollReveal {
        controller,
        observer,
        _callback: Some(callback),
    }
}

fn create_observer(
    callback: &ObserverCallback,
    options: &ObserverOptions,
) -> Option<IntersectionObserver> {
    let init = IntersectionObserverInit::new();
    init.set_root_margin(options.root_margin);
    init.set_threshold(&JsValue::from_f64(options.threshold));
    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()
}
