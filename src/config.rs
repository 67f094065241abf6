use log::Level;

pub const TITLE_PREFIX: &str = "Empower Ability Labs";
pub const DEFAULT_VIEW: &str = "home";

/// Element ids the page behavior is wired to.
pub mod ids {
    pub const MAIN: &str = "main";
    pub const MAIN_NAV: &str = "mainNav";
    pub const COMMUNITY_MODAL: &str = "communityModal";
    pub const COMMUNITY_MODAL_TITLE: &str = "communityModalTitle";
    pub const OPEN_COMMUNITY_MODAL: &str = "openCommunityModal";
    pub const CLOSE_COMMUNITY_MODAL: &str = "closeCommunityModal";
    pub const SCHEDULE_FORM: &str = "scheduleForm";
    pub const FORM_MESSAGES: &str = "formMessages";
    pub const EMAIL: &str = "email";
    pub const TOPIC_SPEAKER: &str = "topicSpeaker";
    pub const EVENT_DETAILS_GROUP: &str = "eventDetailsGroup";
    pub const EVENT_DETAILS: &str = "eventDetails";
    pub const EMAIL_UPDATES_SWITCH: &str = "emailUpdatesSwitch";
}

/// Attribute carried by navigation links naming the view they open.
pub const NAV_ATTRIBUTE: &str = "data-nav";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
