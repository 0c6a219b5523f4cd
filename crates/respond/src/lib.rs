//! JSON HTTP response helpers.
//!
//! Every helper writes `Content-Type: application/json; charset=utf-8`,
//! the status line and, when there is one, a newline-terminated JSON body.
//! Errors always use the same shape:
//!
//! ```json
//! {"message":"Not Found","status":404}
//! ```
//!
//! ```rust
//! use respond::Response;
//!
//! let mut res = Response::new();
//! respond::not_found(&mut res, "");
//! assert_eq!(res.status(), 404);
//! assert_eq!(res.body_str(), "{\"message\":\"Not Found\",\"status\":404}\n");
//! ```

pub mod config;
pub mod error;
pub mod json;
pub mod logging;
pub mod render;
pub mod response;
pub mod sink;

#[cfg(feature = "axum")]
pub mod axum_ext;

pub use config::RenderConfig;
pub use error::{ErrorPayload, HttpError, RespondError, RespondResult};
pub use response::Response;
pub use render::Renderer;
pub use sink::ResponseSink;

use serde::Serialize;

const DEFAULT: Renderer = Renderer::new();

/// 200, empty body.
pub fn ok<S: ResponseSink + ?Sized>(sink: &mut S) {
    DEFAULT.ok(sink)
}

/// 200 with `data` as JSON.
pub fn okay<S, T>(sink: &mut S, data: &T)
where
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    DEFAULT.okay(sink, data)
}

/// `status` with `data` as JSON.
pub fn respond<S, T>(sink: &mut S, status: u16, data: &T)
where
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    DEFAULT.respond(sink, status, data)
}

/// 201 with `data` as JSON.
pub fn created<S, T>(sink: &mut S, data: &T)
where
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    DEFAULT.created(sink, data)
}

/// 204, empty body.
pub fn no_content<S: ResponseSink + ?Sized>(sink: &mut S) {
    DEFAULT.no_content(sink)
}

/// [`ErrorPayload`] with `status` and `message` as given.
pub fn error<S: ResponseSink + ?Sized>(sink: &mut S, status: u16, message: &str) {
    DEFAULT.error(sink, status, message)
}

/// 400; a blank message becomes "Bad Request".
pub fn bad_request<S: ResponseSink + ?Sized>(sink: &mut S, message: &str) {
    DEFAULT.bad_request(sink, message)
}

/// 401; a blank message becomes "Unauthorized".
pub fn unauthorized<S: ResponseSink + ?Sized>(sink: &mut S, message: &str) {
    DEFAULT.unauthorized(sink, message)
}

/// 403; a blank message becomes "Forbidden".
pub fn forbidden<S: ResponseSink + ?Sized>(sink: &mut S, message: &str) {
    DEFAULT.forbidden(sink, message)
}

/// 404; a blank message becomes "Not Found".
pub fn not_found<S: ResponseSink + ?Sized>(sink: &mut S, message: &str) {
    DEFAULT.not_found(sink, message)
}

/// 409; a blank message becomes "Conflict".
pub fn conflict<S: ResponseSink + ?Sized>(sink: &mut S, message: &str) {
    DEFAULT.conflict(sink, message)
}

/// 500; a blank message becomes "Internal Server Error".
pub fn internal_error<S: ResponseSink + ?Sized>(sink: &mut S, message: &str) {
    DEFAULT.internal_error(sink, message)
}

/// Render a typed [`HttpError`].
pub fn fail<S: ResponseSink + ?Sized>(sink: &mut S, err: &HttpError) {
    DEFAULT.fail(sink, err)
}
