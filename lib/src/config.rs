use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, Chainable, Kind};

/// Settings for one documentation run. Passed explicitly to every view model
/// and to the [`SiteWriter`](crate::writer::SiteWriter).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Where `index.html` and the per-resource directories are written.
    pub output_dir: PathBuf,
    /// Where `index.html` and `example.html` templates are looked up.
    pub template_dir: PathBuf,
    /// Shown as the title of the index page.
    pub api_name: String,
    /// When set, example pages include a `curl` command against this host.
    pub curl_host: Option<String>,
    /// Header names left out of rendered `curl` commands.
    pub curl_headers_to_filter: Vec<String>,
    /// Group by first appearance (`true`) or sort resources and examples by
    /// name (`false`).
    pub keep_source_order: bool,
    /// Render and write example pages across a thread pool.
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: PathBuf::from("doc/api"),
            template_dir: PathBuf::from("templates"),
            api_name: "API Documentation".into(),
            curl_host: None,
            curl_headers_to_filter: vec![],
            keep_source_order: true,
            parallel: false,
        }
    }
}

impl Config {
    /// Reads a TOML configuration file. Relative `output_dir` and
    /// `template_dir` are resolved against the file's directory.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let string = std::fs::read_to_string(path)
            .map_err(|e| crate::error::Error::from(e).with_kind(Kind::Config))
            .chain_with(|| error!("failed to read configuration", "path" => path.display()))?;

        let mut config = Config::parse(&string)
            .chain_with(|| error!("invalid configuration", "path" => path.display()))?;

        let base = path.parent().unwrap_or(Path::new(""));
        config.output_dir = base.join(&config.output_dir);
        config.template_dir = base.join(&config.template_dir);
        Ok(config)
    }

    pub fn parse(string: &str) -> Result<Config> {
        Ok(toml::from_str(string)?)
    }
}
