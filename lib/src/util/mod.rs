mod macros;
mod sink;

pub use macros::*;
pub use sink::*;

/// ASCII whitespace, plus vertical tab.
fn is_space(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == '\x0B'
}

/// Lowercases `string` and replaces every run of ASCII whitespace with a
/// single `_`, keeping only the remaining characters for which `keep` returns
/// `true`.
fn underscore(string: &str, keep: impl Fn(char) -> bool) -> String {
    let mut output = String::with_capacity(string.len());

    let mut in_space = false;
    for ch in string.chars().flat_map(char::to_lowercase) {
        if is_space(ch) {
            if !in_space {
                output.push('_');
                in_space = true;
            }

            continue;
        }

        in_space = false;
        if keep(ch) {
            output.push(ch);
        }
    }

    output
}

/// The directory name for a resource: lowercased, with whitespace runs
/// collapsed into `_`. Punctuation is kept.
///
/// ```
/// use recital::util::slugify_dir;
///
/// assert_eq!(slugify_dir("Order  Items"), "order_items");
/// assert_eq!(slugify_dir("Users & Roles"), "users_&_roles");
/// ```
pub fn slugify_dir(name: &str) -> String {
    underscore(name, |_| true)
}

/// Like [`slugify_dir`], but everything that isn't `[a-z_]` is dropped after
/// whitespace is collapsed. May be empty.
pub fn slugify_file(description: &str) -> String {
    underscore(description, |c| matches!(c, 'a'..='z' | '_'))
}

/// The base name of an example's page: [`slugify_file`], or the hex SHA-1 of
/// `description` when the slug comes out empty.
pub fn file_base(description: &str) -> String {
    let slug = slugify_file(description);
    if !slug.is_empty() {
        return slug;
    }

    sha1_smol::Sha1::from(description).digest().to_string()
}

/// [`file_base`] with an `.html` extension.
pub fn file_name(description: &str) -> String {
    let mut name = file_base(description);
    name.push_str(".html");
    name
}
