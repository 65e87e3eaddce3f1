//! Error handling for WASM bindings.
//!
//! Converts page errors into JavaScript-friendly errors.

use folio_core::FolioError;
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid site configuration
    Config,
    /// JSON serialization/deserialization error
    Json,
    /// Navigation controller error
    Navigation,
    /// Page widget error
    Widget,
    /// DOM access error
    Page,
    /// Local storage error
    Storage,
    /// Browser API call failed
    Platform,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::Json => "JSON_ERROR",
            ErrorCode::Navigation => "NAVIGATION_ERROR",
            ErrorCode::Widget => "WIDGET_ERROR",
            ErrorCode::Page => "PAGE_ERROR",
            ErrorCode::Storage => "STORAGE_ERROR",
            ErrorCode::Platform => "PLATFORM_ERROR",
        }
    }
}

/// A JavaScript-friendly error type.
///
/// Not a wasm_bindgen struct: it converts into a JavaScript `Error` with a
/// `code` property instead.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct WebError {
    code: ErrorCode,
    message: String,
}

impl WebError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Config, message)
    }

    pub fn platform(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Platform, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<FolioError> for WebError {
    fn from(err: FolioError) -> Self {
        let code = match &err {
            FolioError::Config(_) => ErrorCode::Config,
            FolioError::Json(_) => ErrorCode::Json,
            FolioError::Nav(_) => ErrorCode::Navigation,
            FolioError::Widget(_) => ErrorCode::Widget,
            FolioError::Surface(_) => ErrorCode::Page,
            FolioError::Store(_) => ErrorCode::Storage,
            FolioError::Platform(_) => ErrorCode::Platform,
        };
        Self::new(code, err.to_string())
    }
}

impl From<folio_core::widgets::WidgetError> for WebError {
    fn from(err: folio_core::widgets::WidgetError) -> Self {
        Self::new(ErrorCode::Widget, err.to_string())
    }
}

/// Browser API failures arrive as arbitrary JS values.
impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        let message = value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        Self::platform(message)
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        let js_error = js_sys::Error::new(&err.message);
        js_sys::Reflect::set(
            &js_error,
            &"code".into(),
            &JsValue::from_str(err.code.as_str()),
        )
        .ok();
        js_error.into()
    }
}
