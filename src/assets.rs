use crate::error::{Error, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::PathBuf,
};
use tracing::error;

/// Byte-stream provider keyed by resource name.
///
/// Decouples the text readers from any concrete packaging mechanism, be it
/// an application bundle or a plain directory on disk.
pub trait AssetSource {
    /// Open the named resource for reading.
    ///
    /// # Errors
    ///
    /// Returns an io error if the resource does not exist or cannot be
    /// opened.
    fn open(&self, name: &str) -> std::io::Result<Box<dyn Read>>;
}

/// Filesystem-backed [`AssetSource`] rooted at a directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirSource {
    fn open(&self, name: &str) -> std::io::Result<Box<dyn Read>> {
        let file = File::open(self.root.join(name))?;
        Ok(Box::new(file))
    }
}

/// Read a named text resource fully into a string.
///
/// Lines are joined with `\n`, including a trailing newline after the final
/// line; original line terminators (`\n` or `\r\n`) are not preserved. The
/// underlying stream is dropped on every exit path.
///
/// # Errors
///
/// Returns [`Error::Asset`] if the resource cannot be opened or a read
/// fails. Failure is all-or-nothing; no partial content is returned.
pub fn try_read_text(source: &dyn AssetSource, name: &str) -> Result<String> {
    let stream = source.open(name).map_err(|e| Error::asset(name, e))?;
    let reader = BufReader::new(stream);
    let mut out = String::new();
    for line in reader.lines() {
        let line = line.map_err(|e| Error::asset(name, e))?;
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

/// Masking variant of [`try_read_text`]: failures are logged and collapse to
/// an empty string.
///
/// Callers cannot tell a missing resource from an empty one through this
/// interface; use [`try_read_text`] where that distinction matters.
#[must_use]
pub fn read_text(source: &dyn AssetSource, name: &str) -> String {
    match try_read_text(source, name) {
        Ok(text) => text,
        Err(err) => {
            error!(%err, asset = %name, "failed to read bundled asset");
            String::new()
        }
    }
}
