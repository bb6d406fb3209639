use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::model::Headers;

/// A recorded `curl` invocation that reproduces a request when pointed at a
/// host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Curl {
    pub method: String,
    pub path: String,
    pub data: Option<String>,
    pub headers: Headers,
}

impl Curl {
    /// Renders the command against `host`, e.g. `https://api.example.org`.
    pub fn output(&self, host: &str) -> String {
        self.output_filtered::<&str>(host, &[])
    }

    /// Renders the command against `host`, leaving out any header whose
    /// printed name matches one in `filter` (ignoring case), so `Host` also
    /// drops a recorded `HTTP_HOST`.
    #[allow(unused_must_use)]
    pub fn output_filtered<S: AsRef<str>>(&self, host: &str, filter: &[S]) -> String {
        let method = self.method.to_ascii_uppercase();
        let data = self.data.as_deref().filter(|d| !d.is_empty());

        let mut cmd = String::from("curl");
        match &*method {
            "GET" | "HEAD" => {
                if method == "GET" {
                    cmd.push_str(" -g");
                }

                write!(&mut cmd, " \"{host}{}", self.path);
                if let Some(query) = data {
                    write!(&mut cmd, "?{query}");
                }

                cmd.push('"');
            }
            _ => {
                write!(&mut cmd, " \"{host}{}\"", self.path);
                if let Some(body) = data {
                    write!(&mut cmd, " -d '{}'", body.replace('\'', "\\u0027"));
                }
            }
        }

        write!(&mut cmd, " -X {method}");

        let filter: Vec<String> = filter.iter().map(|f| header_name(f.as_ref())).collect();
        let headers = self.headers.iter()
            .map(|(name, value)| (header_name(name), value))
            .filter(|(name, _)| !filter.iter().any(|f| f.eq_ignore_ascii_case(name)));

        for (name, value) in headers {
            write!(&mut cmd, " \\\n\t-H \"{name}: {value}\"");
        }

        cmd
    }
}

/// `HTTP_CONTENT_TYPE` and `content-type` both become `Content-Type`.
fn header_name(name: &str) -> String {
    let name = name.strip_prefix("HTTP_").unwrap_or(name);
    let mut output = String::with_capacity(name.len());
    for (i, word) in name.split(['_', '-']).enumerate() {
        if i > 0 {
            output.push('-');
        }

        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            output.push(first.to_ascii_uppercase());
            output.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
    }

    output
}
