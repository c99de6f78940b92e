//! Errors raised while mounting the page effects

use wasm_bindgen::JsValue;

/// Failure of a setup step
#[derive(Debug, thiserror::Error)]
pub enum EffectError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("no element matches `{0}`")]
    MissingElement(String),
    #[error("document contains no pages")]
    NoPages,
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for EffectError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        EffectError::Dom(message)
    }
}

pub type Result<T> = std::result::Result<T, EffectError>;
