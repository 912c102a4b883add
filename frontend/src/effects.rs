use log::info;
use yew::prelude::*;

use crate::a11y::{ensure_keyboard_access, install_smooth_scroll};
use crate::animations::buttons::install_button_effects;
use crate::animations::hero::play_hero_entrance;
use crate::animations::scroll::{install_scroll_reveal, ScrollReveal};
use crate::dom::Listener;
use crate::lazy::{install_lazy_images, LazyImages};

/// Everything wired straight onto the rendered document. Dropping it removes
/// the listeners and disconnects the observers.
pub struct PageEffects {
    _reveal: ScrollReveal,
    _lazy_images: Option<LazyImages>,
    _listeners: Vec<Listener>,
}

impl PageEffects {
    pub fn install() -> PageEffects {
        let reveal = install_scroll_reveal();
        play_hero_entrance();
        ensure_keyboard_access();

        let mut listeners = install_button_effects();
        listeners.extend(install_smooth_scroll());
        let lazy_images = install_lazy_images();

        info!("page effects installed");
        PageEffects {
            _reveal: reveal,
            _lazy_images: lazy_images,
            _listeners: listeners,
        }
    }
}

/// Installs the page effects once the home page is in the document and
/// removes them when it unmounts.
#[hook]
pub fn use_page_effects() {
    use_effect_with_deps(
        |_| {
            let effects = PageEffects::install();
            move || drop(effects)
        },
        (),
    );
}
