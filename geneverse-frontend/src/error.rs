use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("http error: {0}")]
    Http(#[from] gloo_net::Error),
    #[error("network response was not ok: {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("js error: {0}")]
    Js(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        UiError::Js(msg)
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reads_like_console_message() {
        let err = UiError::Status {
            status: 503,
            status_text: "Service Unavailable".into(),
        };
        assert_eq!(
            err.to_string(),
            "network response was not ok: 503 Service Unavailable"
        );
    }

    #[test]
    fn missing_element_names_the_id() {
        assert_eq!(
            UiError::MissingElement("chat-window".into()).to_string(),
            "element #chat-window not found"
        );
    }
}
