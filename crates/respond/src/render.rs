//! JSON response rendering.
//!
//! Every helper funnels into [`Renderer::render`], which sets the JSON
//! content type, commits the status and writes the encoded payload. The
//! helpers only differ in the status and payload they hand over.

use http::StatusCode;
use serde::Serialize;

use crate::config::RenderConfig;
use crate::error::{ErrorPayload, HttpError, RespondError, RespondResult, or_default};
use crate::response::{CONTENT_TYPE, CONTENT_TYPE_OPTIONS, JSON_CONTENT_TYPE, TEXT_CONTENT_TYPE};
use crate::json::Encoder;
use crate::sink::ResponseSink;

/// Writes JSON responses into a [`ResponseSink`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Renderer {
    encoder: Encoder,
}

impl Renderer {
    /// HTML-escaped compact JSON.
    pub const fn new() -> Self {
        Renderer {
            encoder: Encoder::new(),
        }
    }

    pub fn with_encoder(encoder: Encoder) -> Self {
        Renderer { encoder }
    }

    pub fn with_config(config: &RenderConfig) -> Self {
        Renderer {
            encoder: config.encoder(),
        }
    }

    /// Renderer configured from `RESPOND_*` environment variables.
    pub fn from_env() -> Self {
        Self::with_config(&RenderConfig::from_env())
    }

    pub fn encoder(&self) -> Encoder {
        self.encoder
    }

    /// Render `payload` with `status`, reporting failures to the caller.
    ///
    /// The payload is encoded before anything touches the sink, so on
    /// `Err(Serialize | InvalidStatus)` the sink is left as it was.
    pub fn try_render<S, T>(
        &self,
        sink: &mut S,
        status: u16,
        payload: Option<&T>,
    ) -> RespondResult<()>
    where
        S: ResponseSink + ?Sized,
        T: Serialize + ?Sized,
    {
        let status = StatusCode::from_u16(status)
            .map_err(|_| RespondError::InvalidStatus(status))?
            .as_u16();
        let body = payload.map(|value| self.encoder.encode(value)).transpose()?;

        // Headers are frozen once the status is written.
        sink.set_header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        sink.write_status(status)?;

        let body_len = body.as_ref().map_or(0, Vec::len);
        if let Some(body) = body {
            sink.write_body(&body)?;
        }
        tracing::debug!(status, body_len, "rendered json response");
        Ok(())
    }

    /// Render `payload` with `status`.
    ///
    /// Never fails: an encoding error or an invalid status produces a
    /// plain-text `500` describing the problem instead. If the sink was
    /// already committed before the call, only the body is replaced.
    pub fn render<S, T>(&self, sink: &mut S, status: u16, payload: Option<&T>)
    where
        S: ResponseSink + ?Sized,
        T: Serialize + ?Sized,
    {
        match self.try_render(sink, status, payload) {
            Ok(()) => {}
            Err(err) if err.is_recoverable() => {
                tracing::error!(status, error = %err, "json response failed, sending fallback");
                write_fallback(sink, &err);
            }
            Err(err) => {
                tracing::warn!(status, error = %err, "response sink failed");
            }
        }
    }

    /// 200 with an empty body.
    pub fn ok<S: ResponseSink + ?Sized>(&self, sink: &mut S) {
        self.render(sink, StatusCode::OK.as_u16(), None::<&()>)
    }

    /// 200 with `data`.
    pub fn okay<S, T>(&self, sink: &mut S, data: &T)
    where
        S: ResponseSink + ?Sized,
        T: Serialize + ?Sized,
    {
        self.render(sink, StatusCode::OK.as_u16(), Some(data))
    }

    pub fn respond<S, T>(&self, sink: &mut S, status: u16, data: &T)
    where
        S: ResponseSink + ?Sized,
        T: Serialize + ?Sized,
    {
        self.render(sink, status, Some(data))
    }

    pub fn created<S, T>(&self, sink: &mut S, data: &T)
    where
        S: ResponseSink + ?Sized,
        T: Serialize + ?Sized,
    {
        self.render(sink, StatusCode::CREATED.as_u16(), Some(data))
    }

    pub fn no_content<S: ResponseSink + ?Sized>(&self, sink: &mut S) {
        self.render(sink, StatusCode::NO_CONTENT.as_u16(), None::<&()>)
    }

    /// `{"message": message, "status": status}` with `status`. The message
    /// is used as given, even when empty.
    pub fn error<S: ResponseSink + ?Sized>(&self, sink: &mut S, status: u16, message: &str) {
        let payload = ErrorPayload::new(status, message);
        self.render(sink, status, Some(&payload))
    }

    pub fn bad_request<S: ResponseSink + ?Sized>(&self, sink: &mut S, message: &str) {
        self.error_or_default(sink, StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized<S: ResponseSink + ?Sized>(&self, sink: &mut S, message: &str) {
        self.error_or_default(sink, StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden<S: ResponseSink + ?Sized>(&self, sink: &mut S, message: &str) {
        self.error_or_default(sink, StatusCode::FORBIDDEN, message)
    }

    pub fn not_found<S: ResponseSink + ?Sized>(&self, sink: &mut S, message: &str) {
        self.error_or_default(sink, StatusCode::NOT_FOUND, message)
    }

    pub fn conflict<S: ResponseSink + ?Sized>(&self, sink: &mut S, message: &str) {
        self.error_or_default(sink, StatusCode::CONFLICT, message)
    }

    pub fn internal_error<S: ResponseSink + ?Sized>(&self, sink: &mut S, message: &str) {
        self.error_or_default(sink, StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Render a typed handler error.
    pub fn fail<S: ResponseSink + ?Sized>(&self, sink: &mut S, err: &HttpError) {
        let payload = err.to_payload();
        self.render(sink, payload.status, Some(&payload))
    }

    fn error_or_default<S>(&self, sink: &mut S, status: StatusCode, message: &str)
    where
        S: ResponseSink + ?Sized,
    {
        self.error(sink, status.as_u16(), or_default(message, status))
    }
}

fn write_fallback<S: ResponseSink + ?Sized>(sink: &mut S, err: &RespondError) {
    sink.set_header(CONTENT_TYPE, TEXT_CONTENT_TYPE);
    sink.set_header(CONTENT_TYPE_OPTIONS, "nosniff");

    let result = if sink.is_committed() {
        Ok(())
    } else {
        sink.write_status(StatusCode::INTERNAL_SERVER_ERROR.as_u16())
    };
    if let Err(e) = result.and_then(|()| sink.write_body(format!("{err}\n").as_bytes())) {
        tracing::warn!(error = %e, "failed to write fallback response");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Response;

    #[test]
    fn invalid_status_leaves_sink_untouched() {
        let mut res = Response::new();
        let err = Renderer::new()
            .try_render(&mut res, 42, Some(&1))
            .unwrap_err();
        assert!(matches!(err, RespondError::InvalidStatus(42)));
        assert!(!res.is_committed());
        assert!(res.content_type().is_none());
    }

    #[test]
    fn two_digit_status_rejected() {
        let mut res = Response::new();
        Renderer::new().respond(&mut res, 99, &"x");
        assert_eq!(res.status(), 500);
        assert_eq!(res.body_str(), "invalid status code 99\n");
    }

    #[test]
    fn invalid_status_renders_fallback() {
        let mut res = Response::new();
        Renderer::new().error(&mut res, 1000, "nope");
        assert_eq!(res.status(), 500);
        assert_eq!(res.content_type(), Some(TEXT_CONTENT_TYPE));
        assert_eq!(res.body_str(), "invalid status code 1000\n");
    }

    #[test]
    fn works_through_trait_objects() {
        let mut res = Response::new();
        {
            let sink: &mut dyn ResponseSink = &mut res;
            Renderer::new().okay(sink, &[1, 2, 3]);
        }
        assert_eq!(res.body_str(), "[1,2,3]\n");
    }
}
