use log::{debug, info};
use thiserror::Error;
use web_sys::{HtmlFormElement, HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use crate::components::field_toggle::{FieldGroup, SpeakerTopic};
use crate::components::switch::{EmailUpdatesSwitch, SwitchState};
use crate::config::ids;

pub const CONFIRMATION: &str = "Thank you. We have received your request.";

/// The one field this form validates.
pub trait EmailInput {
    fn value(&self) -> String;
    /// The browser's own constraint validation for `type="email"`.
    fn check_validity(&self) -> bool;
}

impl EmailInput for HtmlInputElement {
    fn value(&self) -> String {
        HtmlInputElement::value(self)
    }

    fn check_validity(&self) -> bool {
        HtmlInputElement::check_validity(self)
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Rejected(Vec<ValidationError>),
    Accepted,
}

impl Outcome {
    pub fn message(&self) -> String {
        match self {
            Outcome::Rejected(errors) => errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(". "),
            Outcome::Accepted => CONFIRMATION.to_string(),
        }
    }
}

/// An empty value short-circuits the format check, so at most one email
/// error is reported. A missing field counts as empty.
pub fn validate<E: EmailInput>(email: Option<&E>) -> Outcome {
    let mut errors = Vec::new();

    match email {
        Some(input) if !input.value().trim().is_empty() => {
            if !input.check_validity() {
                errors.push(ValidationError::InvalidEmail);
            }
        }
        _ => errors.push(ValidationError::EmailRequired),
    }

    if errors.is_empty() {
        Outcome::Accepted
    } else {
        Outcome::Rejected(errors)
    }
}

/// Widget state after a submission. Acceptance hides the event details and
/// turns the switch off whatever they were; rejection leaves both alone.
pub fn settle(
    outcome: &Outcome,
    group: FieldGroup,
    switch: SwitchState,
) -> (FieldGroup, SwitchState) {
    match outcome {
        Outcome::Accepted => (FieldGroup::hidden(), SwitchState::Off),
        Outcome::Rejected(_) => (group, switch),
    }
}

#[function_component(ScheduleForm)]
pub fn schedule_form() -> Html {
    let form_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message = use_state(String::new);
    let group = use_state(FieldGroup::hidden);
    let switch = use_state(SwitchState::default);

    let on_speaker_change = {
        let group = group.clone();
        Callback::from(move |checked: bool| {
            let mut next = *group;
            if next.on_change(checked) {
                debug!("Event details revealed");
            }
            group.set(next);
        })
    };

    let on_switch_toggle = {
        let switch = switch.clone();
        Callback::from(move |next: SwitchState| switch.set(next))
    };

    let onsubmit = {
        let form_ref = form_ref.clone();
        let email_ref = email_ref.clone();
        let message = message.clone();
        let group = group.clone();
        let switch = switch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Replacing the message clears whatever the last submission said.
            let email = email_ref.cast::<HtmlInputElement>();
            let outcome = validate(email.as_ref());
            message.set(outcome.message());

            match &outcome {
                Outcome::Rejected(errors) => {
                    info!("Schedule form rejected with {} error(s)", errors.len());
                }
                Outcome::Accepted => {
                    info!("Schedule form accepted");
                    if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                        form.reset();
                    }
                }
            }

            let (next_group, next_switch) = settle(&outcome, *group, *switch);
            group.set(next_group);
            switch.set(next_switch);
        })
    };

    html! {
        <form id={ids::SCHEDULE_FORM} ref={form_ref} novalidate={true} onsubmit={onsubmit}>
            <div class="form-group">
                <label for="name">{"Name"}</label>
                <input type="text" id="name" name="name" autocomplete="name" />
            </div>
            <div class="form-group">
                <label for={ids::EMAIL}>{"Email (required)"}</label>
                <input
                    type="email"
                    id={ids::EMAIL}
                    name="email"
                    autocomplete="email"
                    required={true}
                    aria-required="true"
                    ref={email_ref}
                />
            </div>
            <div class="form-group">
                <label for="phone">{"Phone"}</label>
                <input type="tel" id="phone" name="phone" autocomplete="tel" />
            </div>
            <SpeakerTopic group={*group} on_change={on_speaker_change} />
            <EmailUpdatesSwitch state={*switch} on_toggle={on_switch_toggle} />
            <div id={ids::FORM_MESSAGES} role="alert" aria-live="polite">
                {(*message).clone()}
            </div>
            <button type="submit" class="btn btn-primary">{"Book a call"}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Stands in for an `<input type="email">`, with a rough version of the
    /// browser's format check.
    struct FakeEmail(&'static str);

    impl EmailInput for FakeEmail {
        fn value(&self) -> String {
            self.0.to_string()
        }

        fn check_validity(&self) -> bool {
            let value = self.0.trim();
            match value.split_once('@') {
                Some((local, domain)) => {
                    !local.is_empty() && !domain.is_empty() && !domain.contains('@')
                }
                None => value.is_empty(),
            }
        }
    }

    #[test]
    fn empty_email_is_required() {
        for value in ["", "   "] {
            let outcome = validate(Some(&FakeEmail(value)));
            assert_eq!(outcome, Outcome::Rejected(vec![ValidationError::EmailRequired]));
            assert_eq!(outcome.message(), "Email is required");
        }
    }

    #[test]
    fn missing_field_is_treated_as_empty() {
        let outcome = validate::<FakeEmail>(None);
        assert_eq!(outcome.message(), "Email is required");
    }

    #[test]
    fn malformed_email_is_rejected() {
        let outcome = validate(Some(&FakeEmail("not-an-email")));
        assert_eq!(outcome, Outcome::Rejected(vec![ValidationError::InvalidEmail]));
        assert_eq!(outcome.message(), "Please enter a valid email address");
    }

    #[test]
    fn well_formed_email_is_accepted() {
        let outcome = validate(Some(&FakeEmail("ada@example.org")));
        assert_eq!(outcome, Outcome::Accepted);
        assert_eq!(outcome.message(), "Thank you. We have received your request.");
    }

    fn revealed_group() -> FieldGroup {
        let mut group = FieldGroup::hidden();
        group.on_change(true);
        group
    }

    #[test]
    fn acceptance_resets_details_and_switch() {
        let outcome = validate(Some(&FakeEmail("ada@example.org")));
        let (group, switch) = settle(&outcome, revealed_group(), SwitchState::On);
        assert!(!group.is_visible());
        assert_eq!(switch, SwitchState::Off);
        assert_eq!((switch.aria_checked(), switch.label()), ("false", "Off"));
    }

    #[test]
    fn rejection_keeps_details_and_switch() {
        let outcome = validate(Some(&FakeEmail("not-an-email")));
        let (group, switch) = settle(&outcome, revealed_group(), SwitchState::On);
        assert!(group.is_visible());
        assert_eq!(switch, SwitchState::On);

        let outcome = validate(Some(&FakeEmail("")));
        let (group, switch) = settle(&outcome, FieldGroup::hidden(), SwitchState::Off);
        assert!(!group.is_visible());
        assert_eq!(switch, SwitchState::Off);
    }

    #[test]
    fn rejected_messages_are_joined() {
        let outcome = Outcome::Rejected(vec![
            ValidationError::EmailRequired,
            ValidationError::InvalidEmail,
        ]);
        assert_eq!(
            outcome.message(),
            "Email is required. Please enter a valid email address"
        );
    }
}
