use minijinja::{Environment, ErrorKind, UndefinedBehavior, path_loader};
use serde::Serialize;

use crate::config::Config;
use crate::error::{Chainable, ErrorDetail, Kind, Result};
use crate::templating::{Engine, EngineInit};
use crate::view::{ExampleView, IndexView};

#[derive(Debug)]
pub struct MiniJinjaEngine {
    env: Result<Environment<'static>>,
}

fn environment(config: &Config) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_global("api_name", config.api_name.clone());
    env.add_filter("slugify_dir", ext::slugify_dir);
    env.add_filter("file_name", ext::file_name);
    env.add_filter("lines", ext::lines);
    env
}

fn try_init(config: &Config) -> Result<Environment<'static>> {
    let dir = &config.template_dir;
    if !dir.is_dir() {
        return Err(error!(
            "template directory does not exist",
            "path" => dir.display(),
        ).with_kind(Kind::Config));
    }

    let mut env = environment(config);
    env.set_loader(path_loader(dir));
    Ok(env)
}

fn try_init_with(
    config: &Config,
    templates: &[(&'static str, &'static str)],
) -> Result<Environment<'static>> {
    let mut env = environment(config);
    for &(name, source) in templates {
        env.add_template(name, source)
            .chain_with(|| error!("invalid built-in template", "template" => name))?;
    }

    Ok(env)
}

impl EngineInit for MiniJinjaEngine {
    type Engine = Self;

    fn init(config: &Config) -> Self::Engine {
        MiniJinjaEngine { env: try_init(config) }
    }
}

impl MiniJinjaEngine {
    /// An engine over in-memory `(name, source)` templates. The configured
    /// template directory is ignored.
    pub fn with_templates(config: &Config, templates: &[(&'static str, &'static str)]) -> Self {
        MiniJinjaEngine { env: try_init_with(config, templates) }
    }

    fn render<S: Serialize>(&self, name: &str, context: S) -> Result<String> {
        let env = self.env.as_ref().map_err(|e| e.clone())?;
        let template = env.get_template(name)?;
        Ok(template.render(context)?)
    }
}

impl Engine for MiniJinjaEngine {
    fn render_index(&self, name: &str, view: &IndexView<'_>) -> Result<String> {
        self.render(name, view)
    }

    fn render_example(&self, name: &str, view: &ExampleView<'_>) -> Result<String> {
        self.render(name, view)
    }
}

mod ext {
    use minijinja::value::Value;

    pub fn slugify_dir(value: &str) -> String {
        crate::util::slugify_dir(value)
    }

    pub fn file_name(value: &str) -> String {
        crate::util::file_name(value)
    }

    /// Splits formatted `key: value` text back into its lines.
    pub fn lines(value: &str) -> Value {
        value.lines().map(Value::from).collect()
    }
}

impl ErrorDetail for minijinja::Error {
    fn kind(&self) -> Kind {
        match minijinja::Error::kind(self) {
            ErrorKind::TemplateNotFound | ErrorKind::SyntaxError => Kind::Config,
            _ => Kind::Render,
        }
    }

    fn context(&self) -> Vec<(Option<String>, String)> {
        let error: &(dyn std::error::Error + Send + Sync) = self;
        error.context()
    }
}
