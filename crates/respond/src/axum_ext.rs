//! axum integration.
//!
//! Handlers can return the crate's recorded [`Response`](crate::Response),
//! a [`Json`] reply or an [`HttpError`] directly:
//!
//! ```rust,ignore
//! use axum::http::StatusCode;
//! use respond::{HttpError, axum_ext::Json};
//!
//! async fn create_user() -> Result<(StatusCode, Json<User>), HttpError> {
//!     let user = store.insert(..).map_err(|e| HttpError::Conflict(e.to_string()))?;
//!     Ok((StatusCode::CREATED, Json(user)))
//! }
//! ```

use axum::body::Body;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use serde::Serialize;

use crate::error::HttpError;
use crate::response::Response;
use crate::render::Renderer;

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        let (status, headers, body) = self.into_parts();

        let mut res = axum::response::Response::new(Body::from(body));
        *res.status_mut() =
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        for (name, value) in headers {
            match (HeaderName::try_from(name), HeaderValue::try_from(value)) {
                (Ok(name), Ok(value)) => {
                    res.headers_mut().insert(name, value);
                }
                _ => tracing::warn!("dropping header that is not valid HTTP"),
            }
        }
        res
    }
}

/// JSON reply rendered with the default [`Renderer`]: `200`, HTML-safe
/// escaping, newline-terminated body.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> axum::response::Response {
        let mut res = Response::new();
        Renderer::new().okay(&mut res, &self.0);
        res.into_response()
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> axum::response::Response {
        let mut res = Response::new();
        Renderer::new().fail(&mut res, &self);
        res.into_response()
    }
}
