//! The registry of views the page knows about.
//!
//! A view is one top-level `<section class="view-section">`. Only one of them
//! is visible at a time; an identifier that names no section hides them all.

use std::fmt;

use crate::config::{DEFAULT_VIEW, TITLE_PREFIX};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn home() -> Self {
        Self::new(DEFAULT_VIEW)
    }

    /// Reads a view out of `location.hash`. An absent or empty fragment means
    /// the home view, anything else is taken verbatim.
    pub fn from_fragment(hash: &str) -> Self {
        let id = hash.strip_prefix('#').unwrap_or(hash);
        if id.is_empty() {
            Self::home()
        } else {
            Self::new(id)
        }
    }

    /// Reads a view out of a link's `data-nav` attribute.
    pub fn from_nav_attribute(value: Option<&str>) -> Self {
        match value {
            Some(id) if !id.is_empty() => Self::new(id),
            _ => Self::home(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn fragment(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewEntry {
    pub id: &'static str,
    pub nav_label: &'static str,
    pub title: &'static str,
}

pub const VIEWS: &[ViewEntry] = &[
    ViewEntry {
        id: "home",
        nav_label: "Home",
        title: "Home",
    },
    ViewEntry {
        id: "services",
        nav_label: "Services",
        title: "Services",
    },
    ViewEntry {
        id: "schedule",
        nav_label: "Schedule a call",
        title: "Schedule a call",
    },
];

pub fn lookup(id: &ViewId) -> Option<&'static ViewEntry> {
    VIEWS.iter().find(|entry| entry.id == id.as_str())
}

/// Title label for a view. Unknown ids fall back to "Home".
pub fn title_label(id: &ViewId) -> &'static str {
    lookup(id).map(|entry| entry.title).unwrap_or("Home")
}

pub fn document_title(id: &ViewId) -> String {
    format!("{} {}", TITLE_PREFIX, title_label(id))
}

pub fn is_visible(section: &str, current: &ViewId) -> bool {
    section == current.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_and_missing_fragments_mean_home() {
        assert_eq!(ViewId::from_fragment(""), ViewId::home());
        assert_eq!(ViewId::from_fragment("#"), ViewId::home());
        assert_eq!(ViewId::from_fragment("#home"), ViewId::home());
    }

    #[test]
    fn fragments_are_used_verbatim() {
        assert_eq!(ViewId::from_fragment("#services").as_str(), "services");
        assert_eq!(ViewId::from_fragment("#no-such-view").as_str(), "no-such-view");
        assert_eq!(ViewId::from_fragment("#a#b").as_str(), "a#b");
    }

    #[test]
    fn missing_nav_attribute_means_home() {
        assert_eq!(ViewId::from_nav_attribute(None), ViewId::home());
        assert_eq!(ViewId::from_nav_attribute(Some("")), ViewId::home());
        assert_eq!(
            ViewId::from_nav_attribute(Some("schedule")),
            ViewId::new("schedule")
        );
    }

    #[test]
    fn titles_come_from_the_registry() {
        assert_eq!(document_title(&ViewId::home()), "Empower Ability Labs Home");
        assert_eq!(
            document_title(&ViewId::new("services")),
            "Empower Ability Labs Services"
        );
        assert_eq!(
            document_title(&ViewId::new("schedule")),
            "Empower Ability Labs Schedule a call"
        );
        assert_eq!(
            document_title(&ViewId::new("missing")),
            "Empower Ability Labs Home"
        );
    }

    #[test]
    fn unknown_view_hides_every_section() {
        let current = ViewId::new("missing");
        assert!(VIEWS.iter().all(|entry| !is_visible(entry.id, &current)));
    }
}
