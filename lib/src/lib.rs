//! Renders recorded API examples into a static HTML documentation site.
//!
//! # Overview
//!
//! Input is an ordered collection of recorded [`Example`]s, each one or more
//! request/response pairs captured by a recorder. Output is a directory:
//!
//! ```text
//! <output_dir>/
//! ├── index.html                   every example, grouped by resource
//! ├── widgets/
//! │   ├── create_a_widget.html     one page per example
//! │   └── list_widgets.html
//! └── order_items/
//!     └── ...
//! ```
//!
//! Rendering proceeds in three steps:
//!
//! 1. Each example becomes an [`ExampleView`](view::ExampleView): headers and
//!    query parameters are flattened into `key: value` text, JSON response
//!    bodies are pretty-printed and highlighted, a `curl` command is rendered
//!    if a host is configured, and the page's directory and file names are
//!    derived from the resource name and description.
//! 2. The views are grouped by resource, in the order resources first appear,
//!    into an [`IndexView`](view::IndexView).
//! 3. A [`SiteWriter`] renders `index.html`, then every example page, through
//!    a template [`Engine`](templating::Engine) and writes them out.
//!
//! Any failure aborts the run; see [`error::Kind`].
//!
//! ```no_run
//! use recital::{Config, SiteWriter};
//! use recital::templating::{EngineInit, MiniJinjaEngine};
//!
//! # fn run(examples: Vec<recital::Example>) -> recital::error::Result<()> {
//! let config = Config::read("lyrebird.toml")?;
//! let engine = MiniJinjaEngine::init(&config);
//! SiteWriter::new(&config, &engine).write(&examples)?;
//! # Ok(())
//! # }
//! ```

#[macro_use]
pub mod error;
pub mod util;
pub mod model;
pub mod format;
pub mod config;
pub mod view;
pub mod templating;
pub mod writer;

pub use config::Config;
pub use model::{Example, Request, Curl};
pub use writer::SiteWriter;

pub use tracing;
