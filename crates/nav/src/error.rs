use folio_traits::SurfaceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavError {
    #[error("Missing page element: {0}")]
    MissingCollaborator(String),

    #[error("Page access failed: {0}")]
    Surface(#[from] SurfaceError),
}
