//! Hash based view routing.
//!
//! Navigation clicks push a history entry carrying `{ view }` and set the
//! fragment to `#view`. Back/forward replays read the fragment back and never
//! push, so `popstate` and `pushState` cannot feed each other.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::ids;
use crate::dom;
use crate::error::SiteError;
use crate::views::{self, ViewId};

/// State object stored with every history entry the router creates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    pub view: String,
}

pub trait HistoryBackend {
    fn push(&mut self, state: &HistoryState, url: &str) -> Result<(), SiteError>;
    /// Current `location.hash`, including the leading `#` when present.
    fn fragment(&self) -> String;
}

/// `window.history` and `window.location`.
#[derive(Debug, Default)]
pub struct BrowserHistory;

impl HistoryBackend for BrowserHistory {
    fn push(&mut self, state: &HistoryState, url: &str) -> Result<(), SiteError> {
        let history = dom::window()?.history().map_err(SiteError::history)?;
        let value = serde_wasm_bindgen::to_value(state)?;
        history
            .push_state_with_url(&value, "", Some(url))
            .map_err(SiteError::history)
    }

    fn fragment(&self) -> String {
        dom::window()
            .ok()
            .and_then(|window| window.location().hash().ok())
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Click on a navigation link, carrying its `data-nav` value.
    Link(Option<String>),
    /// Browser back/forward.
    PopState,
}

/// One presentation of a view. The serial changes on every call so that
/// showing the same view twice still re-runs title and focus handling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Visit {
    pub view: ViewId,
    pub serial: u32,
}

pub struct Router<H> {
    history: H,
    visit: Visit,
}

impl<H: HistoryBackend> Router<H> {
    /// Shows the view named by the current fragment without adding a
    /// history entry; the entry for the initial state already exists.
    pub fn start(history: H) -> Self {
        let view = ViewId::from_fragment(&history.fragment());
        info!("Starting on view {}", view);
        Self {
            history,
            visit: Visit { view, serial: 0 },
        }
    }

    pub fn visit(&self) -> &Visit {
        &self.visit
    }

    #[cfg(test)]
    pub fn history(&self) -> &H {
        &self.history
    }

    #[cfg(test)]
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    pub fn show_view(&mut self, id: ViewId, push_history: bool) -> Visit {
        debug!("Showing view {} (push: {})", id, push_history);
        if push_history {
            let state = HistoryState {
                view: id.to_string(),
            };
            if let Err(err) = self.history.push(&state, &id.fragment()) {
                warn!("Could not record navigation to {}: {}", id, err);
            }
        }
        self.visit = Visit {
            view: id,
            serial: self.visit.serial.wrapping_add(1),
        };
        self.visit.clone()
    }

    pub fn navigate(&mut self, navigation: Navigation) -> Visit {
        match navigation {
            Navigation::Link(target) => {
                let id = ViewId::from_nav_attribute(target.as_deref());
                self.show_view(id, true)
            }
            Navigation::PopState => {
                let id = ViewId::from_fragment(&self.history.fragment());
                self.show_view(id, false)
            }
        }
    }
}

/// Applies the parts of a view change that need the rendered page: the
/// document title and focus. Focus goes to the first `h1` of the shown
/// section, else to the main landmark, else stays where it is.
pub fn present(view: &ViewId) {
    dom::set_title(&views::document_title(view));

    let heading = dom::document()
        .ok()
        .and_then(|document| document.get_element_by_id(view.as_str()))
        .and_then(|section| section.query_selector("h1").ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    match focus_target(heading, dom::html_element_by_id(ids::MAIN)) {
        Some(target) => dom::focus(&target),
        None => debug!("No focus target for view {}", view),
    }
}

/// The section heading wins over the main landmark. With neither, focus is
/// left where it is.
pub fn focus_target<T>(heading: Option<T>, main: Option<T>) -> Option<T> {
    heading.or(main)
}
