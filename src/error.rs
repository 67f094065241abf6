use thiserror::Error;
use wasm_bindgen::JsValue;

/// Browser API failures. None of these are fatal: callers log them and the
/// affected feature simply does nothing.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("history call failed: {0}")]
    History(String),
    #[error("could not encode history state: {0}")]
    State(#[from] serde_wasm_bindgen::Error),
    #[error("could not focus element: {0}")]
    Focus(String),
}

impl SiteError {
    pub fn history(err: JsValue) -> Self {
        SiteError::History(format!("{:?}", err))
    }

    pub fn focus(err: JsValue) -> Self {
        SiteError::Focus(format!("{:?}", err))
    }
}
