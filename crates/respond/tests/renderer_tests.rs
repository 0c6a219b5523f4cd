use respond::json::Encoder;
use respond::{RenderConfig, Renderer, RespondError, Response, ResponseSink};
use serde::Serialize;
use std::io;

#[derive(Serialize)]
struct User {
    id: u32,
    name: String,
}

/// Sink whose transport has gone away.
#[derive(Default)]
struct BrokenSink {
    status: Option<u16>,
    header_calls: usize,
}

impl ResponseSink for BrokenSink {
    fn set_header(&mut self, _name: &str, _value: &str) {
        self.header_calls += 1;
    }

    fn write_status(&mut self, status: u16) -> io::Result<()> {
        self.status = Some(status);
        Ok(())
    }

    fn write_body(&mut self, _chunk: &[u8]) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "connection reset"))
    }

    fn is_committed(&self) -> bool {
        self.status.is_some()
    }
}

#[test]
fn test_indented_renderer() {
    let renderer = Renderer::with_config(&RenderConfig {
        escape_html: true,
        indent: 2,
    });
    let mut res = Response::new();
    renderer.okay(
        &mut res,
        &User {
            id: 1,
            name: "Ann".to_string(),
        },
    );

    assert_eq!(res.body_str(), "{\n  \"id\": 1,\n  \"name\": \"Ann\"\n}\n");
}

#[test]
fn test_renderer_without_html_escaping() {
    let renderer = Renderer::with_encoder(Encoder::new().escape_html(false));
    let mut res = Response::new();
    renderer.bad_request(&mut res, "a < b");

    assert_eq!(
        res.body_str(),
        "{\"message\":\"a < b\",\"status\":400}\n"
    );
}

#[test]
fn test_try_render_reports_serialization_error() {
    let mut data = std::collections::HashMap::new();
    data.insert((1, 2), "pair");

    let mut res = Response::new();
    let err = Renderer::new()
        .try_render(&mut res, 200, Some(&data))
        .unwrap_err();

    assert!(matches!(err, RespondError::Serialize(_)));
    assert!(!res.is_committed());
    assert!(res.content_type().is_none());
}

#[test]
fn test_try_render_reports_sink_failure() {
    let mut sink = BrokenSink::default();
    let err = Renderer::new()
        .try_render(&mut sink, 200, Some(&1))
        .unwrap_err();

    assert!(matches!(err, RespondError::Io(_)));
    assert_eq!(sink.status, Some(200));
}

#[test]
fn test_render_swallows_sink_failure() {
    let mut sink = BrokenSink::default();
    Renderer::new().okay(&mut sink, &"payload");

    // No fallback is attempted once the transport failed.
    assert_eq!(sink.header_calls, 1);
    assert_eq!(sink.status, Some(200));
}

#[test]
fn test_try_render_without_payload() {
    let mut res = Response::new();
    Renderer::new()
        .try_render(&mut res, 204, None::<&()>)
        .unwrap();

    assert_eq!(res.status(), 204);
    assert!(res.body().is_empty());
}

#[test]
fn test_default_renderer_matches_free_functions() {
    let mut a = Response::new();
    let mut b = Response::new();
    Renderer::default().not_found(&mut a, "");
    respond::not_found(&mut b, "");

    assert_eq!(a.status(), b.status());
    assert_eq!(a.body(), b.body());
}
