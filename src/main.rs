use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, PopStateEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

mod config;
mod dom;
mod error;
mod router;
mod views;
mod components {
    pub mod field_toggle;
    pub mod modal;
    pub mod nav;
    pub mod schedule_form;
    pub mod switch;
    pub mod view_section;
}
mod pages {
    pub mod home;
    pub mod schedule;
    pub mod services;
}

use components::nav::Nav;
use config::{ids, NAV_ATTRIBUTE};
use pages::{home::Home, schedule::Schedule, services::Services};
use router::{BrowserHistory, Navigation, Router, Visit};

/// The `data-nav` value of the link a click landed in, if any.
fn nav_target(e: &MouseEvent) -> Option<String> {
    e.target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(&format!("[{}]", NAV_ATTRIBUTE)).ok().flatten())
        .and_then(|link| link.get_attribute(NAV_ATTRIBUTE))
}

#[function_component]
fn App() -> Html {
    let view_router = use_mut_ref(|| Router::start(BrowserHistory));
    let visit = use_state(|| view_router.borrow().visit().clone());

    // Title and focus need the sections rendered with their new visibility.
    use_effect_with_deps(
        move |visit: &Visit| {
            debug!("Presenting view {} (visit {})", visit.view, visit.serial);
            router::present(&visit.view);
            || ()
        },
        (*visit).clone(),
    );

    {
        let view_router = view_router.clone();
        let visit = visit.clone();
        use_event_with_window("popstate", move |_: PopStateEvent| {
            let next = view_router.borrow_mut().navigate(Navigation::PopState);
            info!("History moved to view {}", next.view);
            visit.set(next);
        });
    }

    let on_nav = {
        let visit = visit.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = view_router
                .borrow_mut()
                .navigate(Navigation::Link(nav_target(&e)));
            info!("Navigated to view {}", next.view);
            visit.set(next);
        })
    };

    let current = visit.view.clone();

    html! {
        <>
            <Nav current={current.clone()} on_nav={on_nav.clone()} />
            <main id={ids::MAIN} tabindex="-1">
                <Home current={current.clone()} on_nav={on_nav} />
                <Services current={current.clone()} />
                <Schedule current={current} />
            </main>
            <footer class="site-footer">
                <p>{"© Empower Ability Labs"}</p>
            </footer>
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Empower Ability Labs site");
    yew::Renderer::<App>::new().render();
}
