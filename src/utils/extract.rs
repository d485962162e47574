//! Request extractors whose rejections are reported as `AppError`

use axum::extract::{FromRequest, FromRequestParts};

use super::AppError;

/// `Json` body extractor; malformed or incomplete bodies become a 400
/// with a JSON `ErrorResponse`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `Query` extractor; unparsable parameters become a 400 with a JSON
/// `ErrorResponse`
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
