use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::modal::CommunityModal;
use crate::components::view_section::ViewSection;
use crate::views::ViewId;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub current: ViewId,
    pub on_nav: Callback<MouseEvent>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    html! {
        <ViewSection id="home" current={props.current.clone()}>
            <h1 id="home-heading" tabindex="-1">{"Welcome to Empower Ability Labs"}</h1>
            <p>
                {"Empower Ability Labs is a hub for fostering empathy and understanding around digital accessibility. We help teams build products that work for everyone."}
            </p>
            <h2>{"Our community"}</h2>
            <p>{"Learn who we work with and how you can take part."}</p>
            <CommunityModal />
            <p>
                <a href="#schedule" data-nav="schedule" onclick={props.on_nav.clone()}>
                    {"Schedule a call with us"}
                </a>
            </p>
        </ViewSection>
    }
}
