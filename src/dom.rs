use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::error::SiteError;

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}

/// Looks up an optional element. Absence is not an error, the caller just
/// skips whatever it wanted to do with it.
pub fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    document()
        .ok()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// The element that currently has focus, if it can take focus back later.
pub fn active_element() -> Option<HtmlElement> {
    document()
        .ok()?
        .active_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn focus(element: &HtmlElement) {
    if let Err(err) = element.focus().map_err(SiteError::focus) {
        warn!("{}", err);
    }
}

pub fn set_title(title: &str) {
    match document() {
        Ok(document) => {
            debug!("Setting document title to {:?}", title);
            document.set_title(title);
        }
        Err(err) => warn!("Cannot set title: {}", err),
    }
}

/// Serializes a boolean the way ARIA state attributes expect it.
pub fn aria_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

