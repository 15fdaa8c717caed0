use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element `{0}` is not of the expected type")]
    WrongElement(&'static str),
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error("invalid page config: {0}")]
    Config(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::JSON::stringify(&value)
                    .ok()
                    .and_then(|s| s.as_string())
            })
            .unwrap_or_else(|| "unknown javascript error".to_string());
        PageError::Dom(message)
    }
}

impl From<serde_json::Error> for PageError {
    fn from(err: serde_json::Error) -> Self {
        PageError::Config(err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for PageError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        PageError::Config(err.to_string())
    }
}

impl From<PageError> for JsValue {
    fn from(err: PageError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type PageResult<T> = Result<T, PageError>;

/// Logs a failed binding or handler without propagating it further.
pub(crate) fn log_failure(context: &str, result: PageResult<()>) {
    if let Err(err) = result {
        log::warn!("{context}: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err: PageError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, PageError::Config(_)));
        assert!(err.to_string().starts_with("invalid page config"));
    }

    #[test]
    fn test_wrong_element_message() {
        let err = PageError::WrongElement("building-select");
        assert_eq!(
            err.to_string(),
            "element `building-select` is not of the expected type"
        );
    }
}
