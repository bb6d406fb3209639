use std::{fs, io};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::fmt::Debug;

use crate::error::{Result, Chainable};

/// A destination for a fully rendered page.
pub trait Sink: Debug {
    fn write<S: AsRef<str>>(&self, contents: S) -> Result<()> {
        self.write_str(contents.as_ref())
    }

    fn write_str(&self, contents: &str) -> Result<()>;
}

impl Sink for fs::File {
    fn write_str(&self, contents: &str) -> Result<()> {
        let mut file = io::BufWriter::new(self);
        file.write_all(contents.as_bytes())?;
        Ok(file.flush()?)
    }
}

impl Sink for &Path {
    fn write_str(&self, contents: &str) -> Result<()> {
        fs::File::create(self)
            .chain(error! {
                "failed to open/create file for writing",
                "file path" => self.display()
            })?
            .write_str(contents)
            .chain_with(|| error! {
                "failed to write file",
                "file path" => self.display()
            })
    }
}

impl Sink for PathBuf {
    fn write_str(&self, contents: &str) -> Result<()> {
        <&Path as Sink>::write_str(&self.as_path(), contents)
    }
}

impl<T: Sink> Sink for &T {
    fn write_str(&self, contents: &str) -> Result<()> {
        <T as Sink>::write_str(self, contents)
    }
}

/// Creates `dir` and its parents unless they already exist. Safe to call
/// concurrently for the same directory.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).chain_with(|| error! {
        "failed to create output directory",
        "directory" => dir.display()
    })
}
