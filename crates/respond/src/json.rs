//! JSON encoding for response bodies.
//!
//! Bodies are produced by serde_json with [`HtmlSafe`] wrapped around the
//! compact or pretty formatter, so strings are safe to embed in HTML:
//! `<`, `>` and `&` become `\u003c`, `\u003e` and `\u0026`. The line and
//! paragraph separators U+2028/U+2029 are always escaped since JavaScript
//! treats them as line terminators. Every encoded body ends with a single
//! `\n`.

use serde::Serialize;
use std::io;

use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter, Serializer};

pub use serde_json::Error;

/// Configurable JSON body encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    escape_html: bool,
    indent: usize,
}

impl Encoder {
    /// HTML escaping on, compact output.
    pub const fn new() -> Self {
        Self {
            escape_html: true,
            indent: 0,
        }
    }

    pub const fn escape_html(mut self, on: bool) -> Self {
        self.escape_html = on;
        self
    }

    /// Pretty-print with `spaces` per nesting level; `0` keeps compact output.
    pub const fn indent(mut self, spaces: usize) -> Self {
        self.indent = spaces;
        self
    }

    pub fn escapes_html(&self) -> bool {
        self.escape_html
    }

    pub fn indent_width(&self) -> usize {
        self.indent
    }

    /// Encode `value` into a fresh buffer, newline-terminated.
    ///
    /// Nothing is produced on failure, so callers never see a partial body.
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, Error> {
        let mut out = Vec::with_capacity(128);
        if self.indent == 0 {
            let formatter = HtmlSafe::new(CompactFormatter, self.escape_html);
            value.serialize(&mut Serializer::with_formatter(&mut out, formatter))?;
        } else {
            let indent = vec![b' '; self.indent];
            let formatter = HtmlSafe::new(PrettyFormatter::with_indent(&indent), self.escape_html);
            value.serialize(&mut Serializer::with_formatter(&mut out, formatter))?;
        }
        out.push(b'\n');
        Ok(out)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode with the default encoder.
#[inline]
pub fn to_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, Error> {
    Encoder::new().encode(value)
}

/// Formatter that escapes HTML-sensitive characters and U+2028/U+2029
/// inside strings, delegating layout to the wrapped formatter.
pub struct HtmlSafe<F> {
    inner: F,
    escape_html: bool,
}

impl<F> HtmlSafe<F> {
    pub fn new(inner: F, escape_html: bool) -> Self {
        HtmlSafe { inner, escape_html }
    }

    fn escape(&self, ch: char) -> Option<&'static [u8]> {
        match ch {
            '<' if self.escape_html => Some(b"\\u003c"),
            '>' if self.escape_html => Some(b"\\u003e"),
            '&' if self.escape_html => Some(b"\\u0026"),
            '\u{2028}' => Some(b"\\u2028"),
            '\u{2029}' => Some(b"\\u2029"),
            _ => None,
        }
    }
}

impl<F: Formatter> Formatter for HtmlSafe<F> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if let Some(escaped) = self.escape(ch) {
                writer.write_all(&fragment.as_bytes()[start..i])?;
                writer.write_all(escaped)?;
                start = i + ch.len_utf8();
            }
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn end_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_key(writer)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }
}
