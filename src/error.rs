use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no browser window available")]
    NoWindow,
    #[error("javascript error: {0}")]
    Js(String),
    #[error("server responded with status {status}")]
    Status { status: u16 },
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub fn from_js(value: &JsValue) -> Self {
        ClientError::Js(js_error_text(value))
    }
}

/// Rejected add-points input. Nothing is sent when this is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("no amount entered")]
    Cancelled,
    #[error("'{0}' is not a number")]
    NotANumber(String),
}

pub fn js_error_text(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}
