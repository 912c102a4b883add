use gloo_timers::callback::Timeout;
use web_sys::{Element, HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::a11y::MAIN_CONTENT_ID;
use crate::animations::motion::prefers_reduced_motion;
use crate::config;
use crate::dom;
use crate::viewport::{use_breakpoint, Breakpoint};

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "How it works", href: "#how-it-works" },
    NavLink { label: "Network", href: "#network" },
    NavLink { label: "Contact", href: "#contact" },
];

/// Open/closed state of the mobile menu and the attribute values it implies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> MenuState {
        MenuState { open: !self.open }
    }

    pub fn closed() -> MenuState {
        MenuState { open: false }
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    pub fn aria_hidden(self) -> &'static str {
        if self.open { "false" } else { "true" }
    }

    pub fn link_tabindex(self) -> &'static str {
        if self.open { "0" } else { "-1" }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rove {
    Next,
    Previous,
}

impl Rove {
    pub fn from_key(key: &str) -> Option<Rove> {
        match key {
            "ArrowDown" => Some(Rove::Next),
            "ArrowUp" => Some(Rove::Previous),
            _ => None,
        }
    }

    /// Index that receives focus, wrapping at both ends.
    pub fn step(self, index: usize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(match self {
            Rove::Next => (index + 1) % len,
            Rove::Previous if index == 0 => len - 1,
            Rove::Previous => (index - 1).min(len - 1),
        })
    }
}

pub fn menu_item_animation(index: usize) -> String {
    format!("slideInFromTop 0.3s ease-out {}ms both", index * 100)
}

fn lift_link(event: MouseEvent, lifted: bool) {
    let Some(link) = dom::event_element(&event) else {
        return;
    };
    dom::set_style(&link, "transition", "transform 0.2s ease-out");
    dom::set_style(
        &link,
        "transform",
        if lifted { "translateY(-1px)" } else { "translateY(0)" },
    );
}

fn focus(node: &NodeRef) {
    if let Some(element) = node.cast::<HtmlElement>() {
        let _ = element.focus();
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(MenuState::default);
    let reduced_motion = use_state(prefers_reduced_motion);
    let breakpoint = use_breakpoint();
    let toggle_ref = use_node_ref();
    let link_refs = use_state(|| NAV_LINKS.iter().map(|_| NodeRef::default()).collect::<Vec<_>>());

    // Leaving the mobile layout always closes the menu.
    {
        let menu = menu.clone();
        use_effect_with_deps(
            move |breakpoint| {
                if *breakpoint != Breakpoint::Mobile {
                    menu.set(MenuState::closed());
                }
                || ()
            },
            breakpoint,
        );
    }

    {
        let menu = menu.clone();
        use_event_with_window("click", move |event: MouseEvent| {
            if !menu.is_open() {
                return;
            }
            let inside_nav = dom::event_element(&event)
                .and_then(|target: Element| target.closest(".navigation").ok().flatten())
                .is_some();
            if !inside_nav {
                menu.set(MenuState::closed());
            }
        });
    }

    {
        let menu = menu.clone();
        let toggle_ref = toggle_ref.clone();
        use_event_with_window("keydown", move |event: KeyboardEvent| {
            if event.key() == "Escape" && menu.is_open() {
                menu.set(MenuState::closed());
                focus(&toggle_ref);
            }
        });
    }

    let on_toggle = {
        let menu = menu.clone();
        let link_refs = link_refs.clone();
        Callback::from(move |_: MouseEvent| {
            let next = menu.toggled();
            menu.set(next);
            if next.is_open() {
                if let Some(first) = link_refs.first().cloned() {
                    Timeout::new(config::MENU_FOCUS_DELAY_MS, move || focus(&first)).forget();
                }
            }
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(MenuState::closed()))
    };

    let on_rove = {
        let link_refs = link_refs.clone();
        Callback::from(move |(index, event): (usize, KeyboardEvent)| {
            let Some(rove) = Rove::from_key(&event.key()) else {
                return;
            };
            event.prevent_default();
            if let Some(next) = rove.step(index, link_refs.len()) {
                focus(&link_refs[next]);
            }
        })
    };

    let (onmouseenter, onmouseleave) = if *reduced_motion {
        (None, None)
    } else {
        (
            Some(Callback::from(|e: MouseEvent| lift_link(e, true))),
            Some(Callback::from(|e: MouseEvent| lift_link(e, false))),
        )
    };

    let state = *menu;

    html! {
        <header class="site-header">
            <nav class="navigation" aria-label="Main navigation">
                <div class="nav-content">
                    <a href={format!("#{}", MAIN_CONTENT_ID)} class="nav-logo">{"Venipak"}</a>

                    <ul class="nav-list">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <li class="nav-item">
                                <a
                                    class="nav-link"
                                    href={link.href}
                                    onmouseenter={onmouseenter.clone()}
                                    onmouseleave={onmouseleave.clone()}
                                >
                                    { link.label }
                                </a>
                            </li>
                        }) }
                    </ul>

                    <a href="#contact" class="btn btn-primary nav-cta">{"Send a parcel"}</a>

                    <button
                        ref={toggle_ref}
                        class="mobile-menu-toggle"
                        type="button"
                        aria-controls="mobile-menu"
                        aria-expanded={state.aria_expanded()}
                        aria-label="Toggle navigation menu"
                        onclick={on_toggle}
                    >
                        <span class="hamburger-line"></span>
                        <span class="hamburger-line"></span>
                        <span class="hamburger-line"></span>
                    </button>
                </div>

                <div id="mobile-menu" class="mobile-menu" aria-hidden={state.aria_hidden()}>
                    <ul class="mobile-nav-list">
                        { for NAV_LINKS.iter().enumerate().map(|(index, link)| {
                            let item_style = (state.is_open() && !*reduced_motion)
                                .then(|| format!("animation: {};", menu_item_animation(index)));
                            let onkeydown = on_rove.reform(move |e: KeyboardEvent| (index, e));
                            html! {
                                <li class="nav-item" style={item_style}>
                                    <a
                                        ref={link_refs[index].clone()}
                                        class="mobile-nav-link"
                                        href={link.href}
                                        tabindex={state.link_tabindex()}
                                        onclick={close_menu.clone()}
                                        {onkeydown}
                                    >
                                        { link.label }
                                    </a>
                                </li>
                            }
                        }) }
                    </ul>
                </div>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_attributes_follow_state() {
        let closed = MenuState::default();
        assert_eq!(closed.aria_expanded(), "false");
        assert_eq!(closed.aria_hidden(), "true");
        assert_eq!(closed.link_tabindex(), "-1");

        let open = closed.toggled();
        assert!(open.is_open());
        assert_eq!(open.aria_expanded(), "true");
        assert_eq!(open.aria_hidden(), "false");
        assert_eq!(open.link_tabindex(), "0");
        assert_eq!(open.toggled(), MenuState::closed());
    }

    #[test]
    fn test_rove_wraps_around() {
        assert_eq!(Rove::Next.step(3, 4), Some(0));
        assert_eq!(Rove::Next.step(1, 4), Some(2));
        assert_eq!(Rove::Previous.step(0, 4), Some(3));
        assert_eq!(Rove::Previous.step(2, 4), Some(1));
        assert_eq!(Rove::Next.step(0, 0), None);
    }

    #[test]
    fn test_rove_keys() {
        assert_eq!(Rove::from_key("ArrowDown"), Some(Rove::Next));
        assert_eq!(Rove::from_key("ArrowUp"), Some(Rove::Previous));
        assert_eq!(Rove::from_key("Enter"), None);
    }

    #[test]
    fn test_menu_items_stagger_by_100ms() {
        assert_eq!(menu_item_animation(0), "slideInFromTop 0.3s ease-out 0ms both");
        assert_eq!(menu_item_animation(2), "slideInFromTop 0.3s ease-out 200ms both");
    }
}
