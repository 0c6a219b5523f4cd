// src/sink.rs
use std::io;

/// Destination for a single HTTP response: headers, then a status line,
/// then body bytes.
///
/// Implementations follow HTTP/1.1 server semantics:
///
/// - header mutations after the status is committed are ignored;
/// - only the first status write counts;
/// - writing body bytes with no status committed commits `200`.
///
/// One sink belongs to one request; it is never shared between writers.
pub trait ResponseSink {
    /// Set `name` to `value`, replacing any previous value (names compare
    /// case-insensitively).
    fn set_header(&mut self, name: &str, value: &str);

    /// Commit the status line and the headers set so far.
    fn write_status(&mut self, status: u16) -> io::Result<()>;

    /// Append bytes to the body.
    fn write_body(&mut self, chunk: &[u8]) -> io::Result<()>;

    /// Whether the status line has been committed.
    fn is_committed(&self) -> bool;
}

impl<S: ResponseSink + ?Sized> ResponseSink for &mut S {
    fn set_header(&mut self, name: &str, value: &str) {
        (**self).set_header(name, value)
    }

    fn write_status(&mut self, status: u16) -> io::Result<()> {
        (**self).write_status(status)
    }

    fn write_body(&mut self, chunk: &[u8]) -> io::Result<()> {
        (**self).write_body(chunk)
    }

    fn is_committed(&self) -> bool {
        (**self).is_committed()
    }
}
