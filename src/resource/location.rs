//! Resource root selection
//!
//! Turns the `json.file.location` setting into the directory JSON files are
//! read from.

use std::path::{Path, PathBuf};

/// Setting value that explicitly asks for the default directory.
pub const DEFAULT_LOCATION: &str = "./JSON_Files/";

/// Name of the default directory inside the resource directory.
pub const DEFAULT_DIR: &str = "JSON_Files";

/// How the resource root is to be found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location<'a> {
    /// `<resources>/JSON_Files`
    Default,
    /// A named entry of the resource directory (`./name`)
    Bundled(&'a str),
    /// A filesystem path used verbatim
    Absolute(&'a str),
}

impl<'a> Location<'a> {
    /// Classifies a raw `json.file.location` value.
    pub fn parse(value: Option<&'a str>) -> Self {
        match value {
            None => Location::Default,
            Some(DEFAULT_LOCATION) => Location::Default,
            Some(v) => match v.strip_prefix("./") {
                Some(name) => Location::Bundled(name),
                None => Location::Absolute(v),
            },
        }
    }

    /// Resolves the root against the built-in resource directory.
    ///
    /// A bundled name that does not exist yields `None` rather than an
    /// error; absolute paths are returned without touching the filesystem.
    pub fn resolve(&self, resources: &Path) -> Option<PathBuf> {
        match *self {
            Location::Default => {
                tracing::debug!("JSON file location not configured, using default path");
                Some(resources.join(DEFAULT_DIR))
            }
            Location::Bundled(name) => {
                let root = resources.join(name);
                if root.exists() {
                    tracing::debug!(root = %root.display(), "JSON file location mapped to bundled resource");
                    Some(root)
                } else {
                    tracing::debug!(name = %name, "Bundled resource not found");
                    None
                }
            }
            Location::Absolute(path) => {
                tracing::debug!(root = %path, "JSON file location is an absolute path");
                Some(PathBuf::from(path))
            }
        }
    }
}
