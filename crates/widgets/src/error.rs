use folio_traits::{StoreError, SurfaceError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("Theme list is empty")]
    NoThemes,

    #[error("UTC offset of {0} minutes is out of range")]
    InvalidOffset(i32),

    #[error("A message is already being sent")]
    SubmissionInFlight,

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Page access failed: {0}")]
    Surface(#[from] SurfaceError),
}
