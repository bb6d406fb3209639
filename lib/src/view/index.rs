use std::sync::Arc;

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::model::Example;
use crate::view::ExampleView;

/// Everything the index page can read.
#[derive(Debug, Serialize)]
pub struct IndexView<'a> {
    pub api_name: &'a str,
    pub sections: Vec<Section<'a>>,
    /// Every example, in input order.
    pub examples: Vec<Arc<ExampleView<'a>>>,
}

/// The examples sharing one resource name.
#[derive(Debug, Serialize)]
pub struct Section<'a> {
    pub resource_name: &'a str,
    pub examples: Vec<Arc<ExampleView<'a>>>,
}

impl<'a> IndexView<'a> {
    /// Builds a view for every example, then groups them by resource.
    pub fn new(examples: &'a [Example], config: &'a Config) -> Result<Self> {
        let examples: Vec<_> = if config.parallel {
            examples.par_iter()
                .map(|e| ExampleView::new(e, config).map(Arc::new))
                .collect::<Result<Vec<_>>>()?
        } else {
            examples.iter()
                .map(|e| ExampleView::new(e, config).map(Arc::new))
                .collect::<Result<Vec<_>>>()?
        };

        let sections = sections(&examples, config.keep_source_order);
        Ok(IndexView { api_name: &config.api_name, sections, examples })
    }
}

/// Partitions `examples` by resource name. Sections appear in the order their
/// resource is first seen, examples within a section in input order. Without
/// `keep_source_order`, sections are sorted by resource name and examples by
/// description instead.
pub fn sections<'a>(examples: &[Arc<ExampleView<'a>>], keep_source_order: bool) -> Vec<Section<'a>> {
    let mut positions: FxHashMap<&str, usize> = FxHashMap::default();
    let mut sections: Vec<Section<'a>> = vec![];
    for example in examples {
        let i = *positions.entry(example.resource_name).or_insert_with(|| {
            sections.push(Section { resource_name: example.resource_name, examples: vec![] });
            sections.len() - 1
        });

        sections[i].examples.push(example.clone());
    }

    if !keep_source_order {
        sections.sort_by(|a, b| a.resource_name.cmp(&b.resource_name));
        for section in &mut sections {
            section.examples.sort_by(|a, b| a.description.cmp(&b.description));
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(resource: &str, description: &str) -> Example {
        Example {
            resource_name: resource.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    fn shape<'a>(view: &'a IndexView<'_>) -> Vec<(&'a str, Vec<&'a str>)> {
        view.sections.iter()
            .map(|s| (s.resource_name, s.examples.iter().map(|e| e.description).collect()))
            .collect()
    }

    #[test]
    fn groups_by_first_appearance() {
        let examples = [
            example("B", "b one"),
            example("A", "a one"),
            example("B", "b two"),
        ];

        let config = Config::default();
        let view = IndexView::new(&examples, &config).unwrap();
        assert_eq!(shape(&view), [("B", vec!["b one", "b two"]), ("A", vec!["a one"])]);
        assert_eq!(view.examples.len(), 3);
        assert_eq!(view.examples[1].description, "a one");
    }

    #[test]
    fn sorts_without_source_order() {
        let examples = [
            example("Widgets", "Update"),
            example("Gadgets", "List"),
            example("Widgets", "Create"),
        ];

        let config = Config { keep_source_order: false, ..Config::default() };
        let view = IndexView::new(&examples, &config).unwrap();
        assert_eq!(shape(&view), [
            ("Gadgets", vec!["List"]),
            ("Widgets", vec!["Create", "Update"]),
        ]);

        // The flat list is untouched.
        assert_eq!(view.examples[0].description, "Update");
    }

    #[test]
    fn parallel_build_keeps_order() {
        let examples: Vec<_> = (0..64)
            .map(|i| example(["X", "Y", "Z"][i % 3], &format!("example {i}")))
            .collect();

        let sequential = Config::default();
        let parallel = Config { parallel: true, ..Config::default() };
        let a = IndexView::new(&examples, &sequential).unwrap();
        let b = IndexView::new(&examples, &parallel).unwrap();
        assert_eq!(shape(&a), shape(&b));
        assert_eq!(a.api_name, "API Documentation");
    }

    #[test]
    fn empty_collection() {
        let config = Config::default();
        let view = IndexView::new(&[], &config).unwrap();
        assert!(view.sections.is_empty());
        assert!(view.examples.is_empty());
    }
}
