use syntect::html::{ClassedHTMLGenerator, ClassStyle};
use syntect::parsing::{SyntaxSet, SyntaxReference};
use syntect::util::LinesWithEndings;
use once_cell::sync::Lazy;

use crate::error::Result;

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

static DEFAULT_SYNTAX: Lazy<&'static SyntaxReference>
    = Lazy::new(|| SYNTAX_SET.find_syntax_plain_text());

/// Classed-HTML syntax highlighting for response bodies.
#[derive(Default, Clone)]
pub struct SyntaxHighlight;

impl SyntaxHighlight {
    /// Loads the syntax set in the background so the first highlighted body
    /// doesn't pay for it.
    #[inline]
    pub fn warm_up() {
        rayon::spawn(|| { Lazy::force(&SYNTAX_SET); });
        rayon::spawn(|| { Lazy::force(&DEFAULT_SYNTAX); });
    }

    /// Highlights `code` as `lang` (a syntax token such as `json`), falling
    /// back to plain text for unknown languages. Returns a `div.code` with a
    /// line-number gutter.
    pub fn highlight(&self, lang: &str, code: &str) -> Result<String> {
        let syntax = SYNTAX_SET.find_syntax_by_token(lang)
            .unwrap_or(*DEFAULT_SYNTAX);

        let mut generator = html_generator(syntax);
        for line in LinesWithEndings::from(code) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }

        let mut lines = memchr::memchr_iter(b'\n', code.as_bytes()).count();
        if !code.is_empty() && !code.ends_with('\n') {
            lines += 1;
        }

        Ok(code_div(lines, generator.finalize()))
    }
}

fn html_generator(syntax: &SyntaxReference) -> ClassedHTMLGenerator<'_> {
    ClassedHTMLGenerator::new_with_class_style(syntax, &*SYNTAX_SET, ClassStyle::Spaced)
}

#[allow(unused_must_use)]
fn code_div(lines: usize, code: String) -> String {
    use std::fmt::Write;

    let mut div = String::new();
    write!(&mut div, "<div class=\"code\" style=\"display: flex;\">");

    write!(&mut div, "<pre class=\"line-nums\">");
    for i in 1..=lines {
        if i < lines { write!(&mut div, "{}\n", i); }
        else { write!(&mut div, "{}", i); }
    }
    write!(&mut div, "</pre>");

    write!(&mut div, "<pre class=\"code\">{}</pre>", code);
    write!(&mut div, "</div>");

    div
}
