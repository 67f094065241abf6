use yew::prelude::*;

use crate::views::{self, ViewId};

#[derive(Properties, PartialEq)]
pub struct ViewSectionProps {
    pub id: &'static str,
    pub current: ViewId,
    pub children: Children,
}

/// A top-level view. Shown iff its id is the current view.
#[function_component(ViewSection)]
pub fn view_section(props: &ViewSectionProps) -> Html {
    html! {
        <section
            id={props.id}
            class="view-section"
            aria-labelledby={format!("{}-heading", props.id)}
            hidden={!views::is_visible(props.id, &props.current)}
        >
            { for props.children.iter() }
        </section>
    }
}
