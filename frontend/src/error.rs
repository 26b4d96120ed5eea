use thiserror::Error;
use wasm_bindgen::JsValue;

/// A browser capability that could not be used.
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("{0} is not available")]
    Unsupported(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for BrowserError {
    fn from(value: JsValue) -> Self {
        BrowserError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not encode message: {0}")]
    Encode(String),
    #[error("network request failed: {0}")]
    Network(String),
    #[error("server rejected message with status {status}")]
    Rejected { status: u16 },
}
