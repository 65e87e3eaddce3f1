//! Defines the unified error type for page operations.

use folio_nav::NavError;
use folio_traits::{StoreError, SurfaceError};
use folio_widgets::WidgetError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Navigation error: {0}")]
    Nav(#[from] NavError),
    #[error("Widget error: {0}")]
    Widget(#[from] WidgetError),
    #[error("Page access error: {0}")]
    Surface(#[from] SurfaceError),
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
    #[error("Platform error: {0}")]
    Platform(String),
}
