use axum::extract::FromRequest;

use crate::errors::AppError;

/// `axum::Json` whose rejections (bad syntax, wrong content type) surface as
/// `AppError::Validation` in the standard error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
