// src/response.rs
use std::io::{self, Write};

use http::StatusCode;

use crate::sink::ResponseSink;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// An in-memory response that records everything written through
/// [`ResponseSink`].
///
/// Headers stay mutable until the status is committed. Writing body bytes
/// before any status commits `200 OK`, the way HTTP/1.1 servers do.
#[derive(Debug, Clone, Default)]
pub struct Response {
    status: Option<u16>,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed status, or 200 when nothing has been written yet.
    pub fn status(&self) -> u16 {
        self.status.unwrap_or(StatusCode::OK.as_u16())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body as text; invalid UTF-8 is replaced.
    pub fn body_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn into_parts(self) -> (u16, Vec<(String, String)>, Vec<u8>) {
        (self.status(), self.headers, self.body)
    }

    /// Serialize as an HTTP/1.1 response: status line, headers,
    /// `Content-Length`, blank line, body.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let status = self.status();
        let reason = StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason());
        match reason {
            Some(reason) => write!(w, "HTTP/1.1 {status} {reason}\r\n")?,
            None => write!(w, "HTTP/1.1 {status} status code {status}\r\n")?,
        }

        for (name, value) in &self.headers {
            if name.eq_ignore_ascii_case("content-length") {
                continue;
            }
            write!(w, "{name}: {value}\r\n")?;
        }
        write!(w, "Content-Length: {}\r\n\r\n", self.body.len())?;
        w.write_all(&self.body)?;
        w.flush()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(128 + self.body.len());
        // Writing into a Vec cannot fail.
        let _ = self.write_to(&mut buf);
        buf
    }
}

impl ResponseSink for Response {
    fn set_header(&mut self, name: &str, value: &str) {
        if self.status.is_some() {
            tracing::debug!(header = name, "header set after status was committed; ignored");
            return;
        }
        match self
            .headers
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            Some(entry) => entry.1 = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
    }

    fn write_status(&mut self, status: u16) -> io::Result<()> {
        match self.status {
            Some(committed) => {
                tracing::warn!(committed, ignored = status, "superfluous status write");
            }
            None => self.status = Some(status),
        }
        Ok(())
    }

    fn write_body(&mut self, chunk: &[u8]) -> io::Result<()> {
        if self.status.is_none() {
            self.status = Some(StatusCode::OK.as_u16());
        }
        self.body.extend_from_slice(chunk);
        Ok(())
    }

    fn is_committed(&self) -> bool {
        self.status.is_some()
    }
}
