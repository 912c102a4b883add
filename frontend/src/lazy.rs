use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

use crate::dom;

pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

/// Defers image downloads until each `img[data-src]` nears the viewport.
pub struct LazyImages {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for LazyImages {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn load(image: &Element) {
    if let Some(src) = image.get_attribute("data-src") {
        let _ = image.set_attribute("src", &src);
    }
    let _ = image.class_list().remove_1("lazy");
}

/// `None` without IntersectionObserver support; images then keep their
/// placeholder `src`.
pub fn install_lazy_images() -> Option<LazyImages> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let image = entry.target();
                    load(&image);
                    observer.unobserve(&image);
                }
            }
        },
    );
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok()?;

    let images = dom::query_all(LAZY_IMAGE_SELECTOR);
    for image in &images {
        observer.observe(image);
    }
    debug!("lazy loading {} images", images.len());

    Some(LazyImages {
        observer,
        _callback: callback,
    })
}
