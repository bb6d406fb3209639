use std::path::Path;

use recital::Config;
use recital::error::Result;
use recital::templating::{EXAMPLE_TEMPLATE, INDEX_TEMPLATE};
use tracing::info;

use crate::flags::Lyrebird;

pub const CONFIG_FILE: &str = "lyrebird.toml";

/// The templates compiled into lyrebird, used when no template directory is
/// given on the command line and the configured one doesn't exist.
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (INDEX_TEMPLATE, include_str!("../templates/index.html")),
    (EXAMPLE_TEMPLATE, include_str!("../templates/example.html")),
];

/// Where templates come from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Templates {
    /// `Config::template_dir`.
    Directory,
    /// [`BUILTIN_TEMPLATES`].
    Builtin,
}

/// Loads the configuration file, if any, and applies command-line overrides.
pub fn discover(flags: &Lyrebird) -> Result<(Config, Templates)> {
    let mut config = match &flags.config {
        Some(path) => Config::read(path)?,
        None if Path::new(CONFIG_FILE).is_file() => Config::read(CONFIG_FILE)?,
        None => Config::default(),
    };

    if let Some(output) = &flags.output {
        config.output_dir = output.clone();
    }

    let mut templates = Templates::Directory;
    if let Some(dir) = &flags.templates {
        config.template_dir = dir.clone();
    } else if !config.template_dir.is_dir() {
        info!(missing = %config.template_dir.display(), "using built-in templates");
        templates = Templates::Builtin;
    }

    if let Some(host) = &flags.host {
        config.curl_host = Some(host.clone());
    }

    config.parallel |= flags.parallel;
    Ok((config, templates))
}
