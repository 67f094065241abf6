use yew::prelude::*;

use crate::components::schedule_form::ScheduleForm;
use crate::components::view_section::ViewSection;
use crate::views::ViewId;

#[derive(Properties, PartialEq)]
pub struct ScheduleProps {
    pub current: ViewId,
}

#[function_component(Schedule)]
pub fn schedule(props: &ScheduleProps) -> Html {
    html! {
        <ViewSection id="schedule" current={props.current.clone()}>
            <h1 id="schedule-heading" tabindex="-1">{"Schedule a call"}</h1>
            <p>{"Tell us a little about what you need and we will get back to you."}</p>
            <ScheduleForm />
        </ViewSection>
    }
}
