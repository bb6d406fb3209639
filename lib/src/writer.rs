use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Result, Chainable};
use crate::model::Example;
use crate::templating::{Engine, EXAMPLE_TEMPLATE, INDEX_TEMPLATE};
use crate::util::{ensure_dir, Sink};
use crate::view::{ExampleView, IndexView};

/// Writes the documentation site for a collection of examples: `index.html`
/// first, then one page per example under its resource's directory.
///
/// The first failure aborts the run. Every page is rendered in full before
/// its file is created. When two examples share a page path, the later one
/// in input order wins, in parallel mode too.
#[derive(Debug)]
pub struct SiteWriter<'a, E: ?Sized> {
    pub config: &'a Config,
    pub engine: &'a E,
}

impl<'a, E: Engine + ?Sized> SiteWriter<'a, E> {
    pub fn new(config: &'a Config, engine: &'a E) -> Self {
        SiteWriter { config, engine }
    }

    /// Renders and writes every page. Returns the paths written, index first.
    pub fn write(&self, examples: &[Example]) -> Result<Vec<PathBuf>> {
        let output = &self.config.output_dir;
        info!(output = %output.display(), examples = examples.len(), "writing API documentation");

        let index = IndexView::new(examples, self.config)?;
        let html = self.engine.render_index(INDEX_TEMPLATE, &index)
            .chain_with(|| error!("failed to render index", "template" => INDEX_TEMPLATE))?;

        ensure_dir(output)?;
        let index_path = output.join("index.html");
        index_path.write(html)?;
        debug!(path = %index_path.display(), "wrote index");

        let pages: Vec<PathBuf> = if self.config.parallel {
            // Only the last example per path is written.
            let mut last = FxHashMap::default();
            for (i, example) in index.examples.iter().enumerate() {
                last.insert(example.path(), i);
            }

            index.examples.par_iter()
                .enumerate()
                .map(|(i, example)| {
                    let shadowed = last.get(&example.path()) != Some(&i);
                    self.write_example(output, example, shadowed)
                })
                .collect::<Result<Vec<_>>>()?
        } else {
            index.examples.iter()
                .map(|example| self.write_example(output, example, false))
                .collect::<Result<Vec<_>>>()?
        };

        info!(pages = pages.len() + 1, "finished writing API documentation");

        let mut written = Vec::with_capacity(pages.len() + 1);
        written.push(index_path);
        written.extend(pages);
        Ok(written)
    }

    /// Renders `example` and writes it, unless a later example `shadowed` it.
    fn write_example(
        &self,
        output: &Path,
        example: &ExampleView<'_>,
        shadowed: bool,
    ) -> Result<PathBuf> {
        let html = self.engine.render_example(EXAMPLE_TEMPLATE, example)
            .chain_with(|| error! {
                "failed to render example",
                "example" => example.description,
                "resource" => example.resource_name,
                "template" => EXAMPLE_TEMPLATE,
            })?;

        let dir = output.join(&example.dir_name);
        let path = dir.join(&example.file_name);
        if shadowed {
            debug!(path = %path.display(), example = example.description, "skipped shadowed example");
            return Ok(path);
        }

        ensure_dir(&dir)?;
        path.write(html)?;
        debug!(path = %path.display(), example = example.description, "wrote example");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::error::Kind;
    use crate::model::{Curl, Headers, Request};
    use crate::templating::{EngineInit, MiniJinjaEngine};

    const INDEX: &str = r#"<h1>{{ api_name }}</h1>
{% for section in sections %}<h2>{{ section.resource_name }}</h2>
{% for example in section.examples %}<a href="{{ example.dir_name }}/{{ example.file_name }}">{{ example.description }}</a>
{% endfor %}{% endfor %}"#;

    const EXAMPLE: &str = r#"<h1>{{ description }}</h1>
{% for request in requests %}{% if request.curl %}<pre class="curl">{{ request.curl }}</pre>{% endif %}
{% if request.response_body_highlighted %}{{ request.response_body_formatted|safe }}{% else %}<pre>{{ request.response_body_formatted }}</pre>{% endif %}
{% endfor %}"#;

    struct Site {
        _templates: tempfile::TempDir,
        output: tempfile::TempDir,
        config: Config,
    }

    fn site(host: Option<&str>, parallel: bool) -> Site {
        let templates = tempfile::tempdir().unwrap();
        fs::write(templates.path().join("index.html"), INDEX).unwrap();
        fs::write(templates.path().join("example.html"), EXAMPLE).unwrap();

        let output = tempfile::tempdir().unwrap();
        let config = Config {
            output_dir: output.path().join("docs"),
            template_dir: templates.path().to_path_buf(),
            api_name: "Widget API".into(),
            curl_host: host.map(Into::into),
            parallel,
            ..Config::default()
        };

        Site { _templates: templates, output, config }
    }

    fn example(resource: &str, description: &str, body: &str) -> Example {
        let mut response_headers = Headers::new();
        response_headers.insert("Content-Type".into(), "application/json".into());

        Example {
            resource_name: resource.into(),
            description: description.into(),
            requests: vec![Request {
                request_method: "GET".into(),
                request_path: "/widgets/1".into(),
                response_status: 200,
                response_headers,
                response_body: body.into(),
                curl: Some(Curl { method: "GET".into(), path: "/widgets/1".into(), ..Curl::default() }),
                ..Request::default()
            }],
            ..Example::default()
        }
    }

    fn write(site: &Site, examples: &[Example]) -> Result<Vec<PathBuf>> {
        let engine = MiniJinjaEngine::init(&site.config);
        SiteWriter::new(&site.config, &engine).write(examples)
    }

    #[test]
    fn writes_index_and_example() {
        let site = site(None, false);
        let written = write(&site, &[example("Widgets", "Create a Widget", r#"{"id":1}"#)]).unwrap();

        let docs = site.output.path().join("docs");
        assert_eq!(written, [docs.join("index.html"), docs.join("widgets/create_a_widget.html")]);

        let index = fs::read_to_string(docs.join("index.html")).unwrap();
        assert!(index.contains("<h1>Widget API</h1>"));
        assert!(index.contains("<h2>Widgets</h2>"));
        assert!(index.contains(r#"<a href="widgets/create_a_widget.html">Create a Widget</a>"#));

        let page = fs::read_to_string(docs.join("widgets").join("create_a_widget.html")).unwrap();
        assert!(page.contains("<h1>Create a Widget</h1>"));
        assert!(page.contains("line-nums\">1\n2\n3</pre>"));
        assert!(page.contains("id"));
        assert!(!page.contains("curl"));
    }

    #[test]
    fn host_enables_curl() {
        let site = site(Some("https://api.example.org"), false);
        write(&site, &[example("Widgets", "Show a Widget", "{}")]).unwrap();

        let page = site.output.path().join("docs/widgets/show_a_widget.html");
        let page = fs::read_to_string(page).unwrap();
        assert!(page.contains("curl -g &quot;https:&#x2f;&#x2f;api.example.org&#x2f;widgets&#x2f;1&quot; -X GET"));
    }

    #[test]
    fn raw_bodies_are_escaped() {
        let site = site(None, false);
        let mut example = example("Widgets", "Plain", "<b>hi</b>");
        example.requests[0].response_headers.insert("Content-Type".into(), "text/html".into());
        write(&site, &[example]).unwrap();

        let page = site.output.path().join("docs/widgets/plain.html");
        let page = fs::read_to_string(page).unwrap();
        assert!(page.contains("<pre>&lt;b&gt;hi&lt;&#x2f;b&gt;</pre>"));
    }

    #[test]
    fn rerun_is_byte_identical() {
        let examples = [
            example("Widgets", "Create a Widget", r#"{"id":1,"tags":["a","b"]}"#),
            example("Gadgets", "List Gadgets", "[]"),
            example("Widgets", "!!!", r#"{"id":2}"#),
        ];

        let site = site(None, false);
        let first: Vec<_> = write(&site, &examples).unwrap()
            .into_iter()
            .map(|p| (p.clone(), fs::read(p).unwrap()))
            .collect();

        let second: Vec<_> = write(&site, &examples).unwrap()
            .into_iter()
            .map(|p| (p.clone(), fs::read(p).unwrap()))
            .collect();

        assert_eq!(first.len(), 4);
        assert_eq!(first, second);
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut examples: Vec<_> = (0..24)
            .map(|i| example(["Widgets", "Gadgets", "Order Items"][i % 3], &format!("Example {}", "x".repeat(i + 1)), "{\"ok\":true}"))
            .collect();

        // Pages well past one write buffer, all landing on the same path.
        for tag in ["first", "second", "third"] {
            let items = vec![format!("{{\"{tag}\":\"{}\"}}", tag.repeat(8)); 400].join(",");
            let punctuation = "!".repeat(tag.len());
            examples.push(example("Widgets", &format!("Create a Widget{punctuation}"), &format!("[{items}]")));
        }

        let sequential = site(None, false);
        let parallel = site(None, true);
        let a = write(&sequential, &examples).unwrap();
        let b = write(&parallel, &examples).unwrap();
        assert_eq!(a.len(), b.len());

        for (a, b) in a.iter().zip(&b) {
            let a_rel = a.strip_prefix(sequential.output.path()).unwrap();
            let b_rel = b.strip_prefix(parallel.output.path()).unwrap();
            assert_eq!(a_rel, b_rel);
            assert_eq!(fs::read(a).unwrap(), fs::read(b).unwrap());
        }

        let page = parallel.output.path().join("docs/widgets/create_a_widget.html");
        let page = fs::read_to_string(page).unwrap();
        assert!(page.len() > 16 * 1024);
        assert!(page.contains("third"));
        assert!(!page.contains("first") && !page.contains("second"));
    }

    #[test]
    fn bad_json_aborts_before_index() {
        let site = site(None, false);
        let error = write(&site, &[example("Widgets", "Broken", "{nope")]).unwrap_err();
        assert_eq!(error.kind(), Kind::Format);
        assert!(error.to_string().contains("example: Broken"));
        assert!(!site.output.path().join("docs/index.html").exists());
    }

    #[test]
    fn missing_template_aborts() {
        let site = site(None, false);
        fs::remove_file(site.config.template_dir.join("example.html")).unwrap();

        let error = write(&site, &[example("Widgets", "Create", "{}")]).unwrap_err();
        assert_eq!(error.kind(), Kind::Config);
        assert!(site.output.path().join("docs/index.html").exists());
        assert!(!site.output.path().join("docs/widgets/create.html").exists());
    }

    #[test]
    fn colliding_names_overwrite() {
        let site = site(None, false);
        let examples = [
            example("Widgets", "Create a Widget", r#"{"first":1}"#),
            example("Widgets", "Create a Widget!", r#"{"second":2}"#),
        ];

        write(&site, &examples).unwrap();
        let page = site.output.path().join("docs/widgets/create_a_widget.html");
        let page = fs::read_to_string(page).unwrap();
        assert!(page.contains("second"));
        assert!(!page.contains("first"));
    }
}
