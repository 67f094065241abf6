use yew::prelude::*;

use crate::components::view_section::ViewSection;
use crate::views::ViewId;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub current: ViewId,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    html! {
        <ViewSection id="services" current={props.current.clone()}>
            <h1 id="services-heading" tabindex="-1">{"Services"}</h1>
            <h2>{"Accessibility awareness"}</h2>
            <p>{"Workshops that help product teams understand how people with disabilities use technology."}</p>
            <h2>{"Usability testing"}</h2>
            <p>{"Sessions with users of assistive technology to find the barriers in your product."}</p>
            <h2>{"Inspirational speakers"}</h2>
            <p>{"Speakers with lived experience who can open your next event."}</p>
        </ViewSection>
    }
}
