use log::debug;
use web_sys::{Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::config::ids;
use crate::dom;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwitchState {
    On,
    #[default]
    Off,
}

impl SwitchState {
    /// Only the exact string "true" reads as on.
    pub fn from_aria_checked(value: Option<&str>) -> Self {
        match value {
            Some("true") => SwitchState::On,
            _ => SwitchState::Off,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SwitchState::On => SwitchState::Off,
            SwitchState::Off => SwitchState::On,
        }
    }

    pub fn is_on(self) -> bool {
        self == SwitchState::On
    }

    pub fn aria_checked(self) -> &'static str {
        dom::aria_bool(self.is_on())
    }

    pub fn label(self) -> &'static str {
        match self {
            SwitchState::On => "On",
            SwitchState::Off => "Off",
        }
    }
}

pub fn is_toggle_key(key: &str) -> bool {
    matches!(key, " " | "Enter")
}

#[derive(Properties, PartialEq)]
pub struct EmailUpdatesSwitchProps {
    pub state: SwitchState,
    pub on_toggle: Callback<SwitchState>,
}

/// The "email updates" switch. The owner holds the state so a successful
/// form submission can force it back off.
#[function_component(EmailUpdatesSwitch)]
pub fn email_updates_switch(props: &EmailUpdatesSwitchProps) -> Html {
    let switch_ref = use_node_ref();

    // Reads the rendered attribute back so the next state always follows
    // what assistive technology was told.
    let toggle = {
        let switch_ref = switch_ref.clone();
        let on_toggle = props.on_toggle.clone();
        let fallback = props.state;
        Callback::from(move |_: ()| {
            let current = switch_ref
                .cast::<Element>()
                .map(|el| SwitchState::from_aria_checked(el.get_attribute("aria-checked").as_deref()))
                .unwrap_or(fallback);
            let next = current.toggled();
            debug!("Email updates switch -> {}", next.label());
            on_toggle.emit(next);
        })
    };

    let onclick = toggle.reform(|_: MouseEvent| ());
    let onkeydown = Callback::from(move |e: KeyboardEvent| {
        if is_toggle_key(&e.key()) {
            e.prevent_default();
            toggle.emit(());
        }
    });

    html! {
        <div class="form-group switch-group">
            <span id="emailUpdatesLabel">{"Receive email updates"}</span>
            <span
                id={ids::EMAIL_UPDATES_SWITCH}
                class={classes!("switch", props.state.is_on().then(|| "switch-on"))}
                role="switch"
                tabindex="0"
                aria-labelledby="emailUpdatesLabel"
                aria-checked={props.state.aria_checked()}
                ref={switch_ref}
                onclick={onclick}
                onkeydown={onkeydown}
            >
                {props.state.label()}
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn aria_checked_parsing_is_strict() {
        assert_eq!(SwitchState::from_aria_checked(Some("true")), SwitchState::On);
        for value in ["false", "TRUE", "1", "", "on"] {
            assert_eq!(SwitchState::from_aria_checked(Some(value)), SwitchState::Off);
        }
        assert_eq!(SwitchState::from_aria_checked(None), SwitchState::Off);
    }

    #[test]
    fn toggling_keeps_attribute_and_label_in_step() {
        let on = SwitchState::Off.toggled();
        assert_eq!((on.aria_checked(), on.label()), ("true", "On"));

        let off = on.toggled();
        assert_eq!((off.aria_checked(), off.label()), ("false", "Off"));
    }

    #[test]
    fn toggle_round_trips_through_the_attribute() {
        let mut state = SwitchState::default();
        for _ in 0..4 {
            let next = SwitchState::from_aria_checked(Some(state.aria_checked())).toggled();
            assert_ne!(next, state);
            state = next;
        }
        assert_eq!(state, SwitchState::Off);
    }

    #[test]
    fn space_and_enter_toggle() {
        assert!(is_toggle_key(" "));
        assert!(is_toggle_key("Enter"));
        assert!(!is_toggle_key("Spacebar"));
        assert!(!is_toggle_key("Tab"));
    }
}
