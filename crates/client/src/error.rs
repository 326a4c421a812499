//! Client error types.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while wiring the client to the page.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no window available")]
    NoWindow,

    #[error("no document available")]
    NoDocument,

    #[error("canvas element '{0}' not found")]
    CanvasNotFound(String),

    #[error("2d canvas context unavailable")]
    NoContext,

    #[error("failed to attach event listener")]
    Listener,
}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
