use std::path::PathBuf;

xflags::xflags! {
    /// Render recorded API examples into a static documentation site.
    cmd lyrebird {
        /// JSON file holding an array of recorded examples.
        required examples: PathBuf
        /// Configuration file. Defaults to `lyrebird.toml`, if it exists.
        optional -c, --config config: PathBuf
        /// Directory to write the site into.
        optional -o, --output output: PathBuf
        /// Directory holding `index.html` and `example.html` templates.
        optional -t, --templates templates: PathBuf
        /// Host that `curl` commands are rendered against.
        optional --host host: String
        /// Render and write example pages in parallel.
        optional --parallel
        /// Log more; repeat for even more.
        repeated -v, --verbose
    }
}
