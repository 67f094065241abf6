use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::ids;
use crate::dom;
use crate::views::{ViewId, VIEWS};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub current: ViewId,
    pub on_nav: Callback<MouseEvent>,
}

/// The small-screen menu. `aria-expanded` on the toggler and the `show`
/// class on the menu always come from the same flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    expanded: bool,
}

impl NavMenu {
    pub fn toggled(self) -> Self {
        Self {
            expanded: !self.expanded,
        }
    }

    pub fn aria_expanded(self) -> &'static str {
        dom::aria_bool(self.expanded)
    }

    pub fn class(self) -> Classes {
        classes!("navbar-nav", self.expanded.then(|| "show"))
    }
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { current, on_nav } = props;
    let menu = use_state(NavMenu::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.toggled());
        })
    };

    html! {
        <header class="navbar">
            <a href="#home" class="navbar-brand" data-nav="home" onclick={on_nav.clone()}>
                {"Empower Ability Labs"}
            </a>
            <button
                class="navbar-toggler"
                type="button"
                aria-controls={ids::MAIN_NAV}
                aria-expanded={menu.aria_expanded()}
                aria-label="Toggle navigation"
                onclick={toggle_menu}
            >
                <span class="navbar-toggler-icon"></span>
            </button>
            <nav aria-label="Main">
                <ul id={ids::MAIN_NAV} class={menu.class()}>
                    { for VIEWS.iter().map(|entry| {
                        let is_current = entry.id == current.as_str();
                        html! {
                            <li class="nav-item">
                                <a
                                    href={format!("#{}", entry.id)}
                                    class={classes!("nav-link", is_current.then(|| "active"))}
                                    aria-current={is_current.then(|| "page")}
                                    onclick={on_nav.clone()}
                                    data-nav={entry.id}
                                >
                                    {entry.nav_label}
                                </a>
                            </li>
                        }
                    }) }
                </ul>
            </nav>
        </header>
    }
}
