//! Error responses.
//!
//! `AppError` renders itself as `{"detail": ...}`; see
//! [`folderhub_core::error::status_for`] for the status mapping.

pub use folderhub_core::error::{ApiErrorResponse, status_for};
