use std::path::Path;
use std::time::Instant;

use recital::error::{Chainable, Kind, Result};
use recital::format::SyntaxHighlight;
use recital::templating::{EngineInit, MiniJinjaEngine};
use recital::{error, Example, SiteWriter};
use tracing::info;

mod config;
mod flags;

use config::{Templates, BUILTIN_TEMPLATES};

/// Reads a JSON array of recorded examples.
pub fn load_examples(path: &Path) -> Result<Vec<Example>> {
    let json = std::fs::read_to_string(path).chain_with(|| error! {
        "failed to read recorded examples",
        "path" => path.display(),
    })?;

    serde_json::from_str(&json).chain_with(|| error!(
        "recorded examples are not valid",
        "path" => path.display(),
    ).with_kind(Kind::Config))
}

fn init_tracing(verbose: u32) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

pub fn main() {
    let flags = flags::Lyrebird::from_env_or_exit();
    init_tracing(flags.verbose);

    let start = Instant::now();
    SyntaxHighlight::warm_up();
    let result = config::discover(&flags)
        .and_then(|settings| Ok((load_examples(&flags.examples)?, settings)))
        .and_then(|(examples, (config, templates))| {
            let engine = match templates {
                Templates::Directory => MiniJinjaEngine::init(&config),
                Templates::Builtin => MiniJinjaEngine::with_templates(&config, BUILTIN_TEMPLATES),
            };

            recital::time!(SiteWriter::new(&config, &engine).write(&examples))
        });

    match result {
        Ok(written) => info!(
            pages = written.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "done"
        ),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
