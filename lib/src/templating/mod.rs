pub mod minijinja;

use std::fmt::Debug;

use crate::config::Config;
use crate::error::Result;
use crate::view::{ExampleView, IndexView};

pub use self::minijinja::MiniJinjaEngine;

/// Name of the template used for the index page.
pub const INDEX_TEMPLATE: &str = "index.html";

/// Name of the template used for every example page.
pub const EXAMPLE_TEMPLATE: &str = "example.html";

pub trait EngineInit {
    type Engine: Engine + 'static;

    fn init(config: &Config) -> Self::Engine;
}

/// Renders views into named templates found under the configured template
/// directory. A template that can't be found or parsed is a
/// [`Kind::Config`](crate::error::Kind::Config) error.
pub trait Engine: Send + Sync + Debug {
    fn render_index(&self, name: &str, view: &IndexView<'_>) -> Result<String>;

    fn render_example(&self, name: &str, view: &ExampleView<'_>) -> Result<String>;
}
