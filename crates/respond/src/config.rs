use crate::json::Encoder;

/// Rendering options loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Escape `<`, `>` and `&` in JSON strings (default: true)
    pub escape_html: bool,

    /// Spaces per indentation level; 0 renders compact JSON (default: 0)
    pub indent: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            escape_html: true,
            indent: 0,
        }
    }
}

impl RenderConfig {
    /// Load configuration from environment variables (with .env support).
    ///
    /// - `RESPOND_ESCAPE_HTML`: `true|1|yes` or `false|0|no`
    /// - `RESPOND_INDENT`: spaces per level
    ///
    /// Unset or unparseable values keep their defaults.
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if missing)
        let _ = dotenvy::dotenv();

        let defaults = RenderConfig::default();
        RenderConfig {
            escape_html: std::env::var("RESPOND_ESCAPE_HTML")
                .ok()
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.escape_html),
            indent: std::env::var("RESPOND_INDENT")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.indent),
        }
    }

    pub fn encoder(&self) -> Encoder {
        Encoder::new()
            .escape_html(self.escape_html)
            .indent(self.indent)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
