//! Recorded API examples, as produced by a recorder and consumed read-only.

mod curl;

pub use curl::*;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Header or query-parameter pairs in the order they were recorded.
pub type Headers = IndexMap<String, String>;

/// One documented API interaction.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Example {
    #[serde(alias = "resource")]
    pub resource_name: String,
    pub description: String,
    pub http_method: String,
    pub route: String,
    pub explanation: Option<String>,
    pub parameters: Vec<Parameter>,
    pub response_fields: Vec<Parameter>,
    pub requests: Vec<Request>,
}

/// A documented request parameter or response field.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Parameter {
    pub name: String,
    pub description: String,
    pub required: bool,
    pub scope: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// A single recorded request/response pair.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Request {
    pub request_method: String,
    pub request_path: String,
    pub request_body: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub request_headers: Headers,
    #[serde(deserialize_with = "nullable")]
    pub request_query_parameters: Headers,
    pub request_content_type: Option<String>,
    pub response_status: u16,
    pub response_status_text: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub response_headers: Headers,
    #[serde(deserialize_with = "nullable")]
    pub response_body: String,
    pub response_content_type: Option<String>,
    /// The command that reproduces this request, if one was recorded.
    pub curl: Option<Curl>,
}

impl Request {
    /// The `Content-Type` response header, matched case-insensitively on the
    /// header name.
    pub fn response_content_type_header(&self) -> Option<&str> {
        self.response_headers.get("Content-Type")
            .or_else(|| {
                self.response_headers.iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case("content-type"))
                    .map(|(_, v)| v)
            })
            .map(|v| v.as_str())
    }
}

/// Treats an explicit `null` the same as an absent field.
fn nullable<'de, D, T>(de: D) -> Result<T, D::Error>
    where D: Deserializer<'de>, T: Deserialize<'de> + Default
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}
