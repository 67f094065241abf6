use web_sys::{Event, HtmlElement, HtmlInputElement};
use yew::prelude::*;

use crate::config::ids;
use crate::dom;

/// Visibility of the event-details group. Visible iff the speaker checkbox
/// is checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldGroup {
    visible: bool,
}

impl FieldGroup {
    pub fn hidden() -> Self {
        Self { visible: false }
    }

    pub fn is_visible(self) -> bool {
        self.visible
    }

    /// Mirrors the checkbox. Returns true when this change revealed the group.
    pub fn on_change(&mut self, checked: bool) -> bool {
        let revealed = checked && !self.visible;
        self.visible = checked;
        revealed
    }
}

#[derive(Properties, PartialEq)]
pub struct SpeakerTopicProps {
    pub group: FieldGroup,
    pub on_change: Callback<bool>,
}

#[function_component(SpeakerTopic)]
pub fn speaker_topic(props: &SpeakerTopicProps) -> Html {
    let details_ref = use_node_ref();
    let visible = props.group.is_visible();

    // Focus moves in only once the group has actually been rendered visible.
    {
        let details_ref = details_ref.clone();
        use_effect_with_deps(
            move |visible| {
                if *visible {
                    if let Some(details) = details_ref.cast::<HtmlElement>() {
                        dom::focus(&details);
                    }
                }
                || ()
            },
            visible,
        );
    }

    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.checked());
        })
    };

    html! {
        <fieldset class="form-group">
            <legend>{"What would you like to talk about?"}</legend>
            <div class="form-check">
                <input type="checkbox" id="topicTraining" name="topics" value="training" />
                <label for="topicTraining">{"Accessibility training"}</label>
            </div>
            <div class="form-check">
                <input type="checkbox" id="topicTesting" name="topics" value="testing" />
                <label for="topicTesting">{"Usability testing"}</label>
            </div>
            <div class="form-check">
                <input
                    type="checkbox"
                    id={ids::TOPIC_SPEAKER}
                    name="topics"
                    value="speaker"
                    onchange={onchange}
                />
                <label for={ids::TOPIC_SPEAKER}>{"Invite a speaker to your event"}</label>
            </div>
            <div id={ids::EVENT_DETAILS_GROUP} class="form-group" hidden={!visible}>
                <label for={ids::EVENT_DETAILS}>{"Tell us about your event"}</label>
                <textarea id={ids::EVENT_DETAILS} name="eventDetails" rows="4" ref={details_ref} />
            </div>
        </fieldset>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_mirrors_the_checkbox() {
        let mut group = FieldGroup::hidden();
        assert!(group.on_change(true));
        assert!(group.is_visible());

        assert!(!group.on_change(false));
        assert!(!group.is_visible());
    }

    #[test]
    fn only_a_transition_to_visible_counts_as_a_reveal() {
        let mut group = FieldGroup::hidden();
        assert!(!group.on_change(false));
        assert!(group.on_change(true));
        assert!(!group.on_change(true));
        assert!(group.is_visible());
    }
}
