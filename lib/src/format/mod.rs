mod highlight;

pub use highlight::*;

use crate::error::{Result, Chainable, Kind};
use crate::model::Headers;

/// Content types whose bodies are pretty-printed and highlighted.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// `key: value` lines in iteration order, joined by `\n`. `None` for an
/// absent or empty mapping, never `""`.
pub fn key_value_text(map: Option<&Headers>) -> Option<String> {
    let map = map.filter(|m| !m.is_empty())?;
    let lines: Vec<_> = map.iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .collect();

    Some(lines.join("\n"))
}

/// A response body ready to be placed in a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Syntax-highlighted markup, safe to emit as-is.
    Highlighted(String),
    /// The body exactly as recorded.
    Raw(String),
}

impl Body {
    pub fn is_highlighted(&self) -> bool {
        matches!(self, Body::Highlighted(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Body::Highlighted(s) | Body::Raw(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Body::Highlighted(s) | Body::Raw(s) => s,
        }
    }
}

/// Formats `body` for display. Bodies whose `content_type` starts with
/// `application/json` are parsed, pretty-printed, and highlighted; a body
/// that fails to parse is a [`Kind::Format`] error. Anything else, including
/// an empty body, passes through untouched.
pub fn response_body(content_type: Option<&str>, body: &str) -> Result<Body> {
    match content_type {
        Some(ct) if ct.starts_with(JSON_CONTENT_TYPE) && !body.trim().is_empty() => {
            let pretty = pretty_json(body)?;
            let html = SyntaxHighlight.highlight("json", &pretty)
                .chain_with(|| error!("failed to highlight JSON body"))?;

            Ok(Body::Highlighted(html))
        }
        _ => Ok(Body::Raw(body.to_string())),
    }
}

/// Re-serializes `body` with two-space indentation, keeping key order and
/// every number exactly as written.
pub fn pretty_json(body: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(body)
        .chain_with(|| error!(
            "response body is not valid JSON",
            "content type" => JSON_CONTENT_TYPE,
        ).with_kind(Kind::Format))?;

    Ok(serde_json::to_string_pretty(&value)?)
}
