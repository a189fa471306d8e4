//! Request/response types shared by the HTTP handlers

pub mod error;
pub mod extract;
pub mod patch;

pub use error::{ApiError, ApiErrorResponse};
pub use extract::{Json, Path, Query};
pub use patch::PatchField;
