//! Request path to file contents

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;

use crate::error::{Result, ServerError};
use crate::properties::Properties;
use crate::resource::location::Location;

/// Maps request paths to JSON payloads on disk.
///
/// Cheap to share: the mapping sits behind an `Arc` and is never mutated
/// once the resolver exists. File contents are read fresh on every call.
#[derive(Debug, Clone)]
pub struct ResourceResolver {
    properties: Arc<Properties>,
    resources: PathBuf,
}

impl ResourceResolver {
    /// Create a resolver over `properties`, with `resources` as the built-in
    /// resource directory.
    pub fn new(properties: Arc<Properties>, resources: impl Into<PathBuf>) -> Self {
        Self {
            properties,
            resources: resources.into(),
        }
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Directory mapped files are read from, if it can be located.
    pub fn root(&self) -> Option<PathBuf> {
        Location::parse(self.properties.json_file_location()).resolve(&self.resources)
    }

    /// Returns the contents of the file mapped to `path`.
    ///
    /// `Ok(None)` covers every routing miss: no mapping, no root, or no
    /// regular file at the mapped name. Only a failing read of an existing
    /// file is an error.
    pub async fn resolve(&self, path: &str) -> Result<Option<Bytes>> {
        let Some(file_name) = self.properties.get(path) else {
            tracing::debug!(path = %path, "No mapping for request path");
            return Ok(None);
        };

        let Some(root) = self.root() else {
            return Ok(None);
        };

        read_if_file(&root.join(file_name)).await
    }
}

async fn read_if_file(file: &Path) -> Result<Option<Bytes>> {
    match tokio::fs::metadata(file).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => {
            tracing::debug!(file = %file.display(), "Mapped path is not a file");
            return Ok(None);
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(file = %file.display(), "Mapped file does not exist");
            return Ok(None);
        }
        Err(source) => {
            return Err(ServerError::Resource {
                path: file.to_path_buf(),
                source,
            });
        }
    }

    let contents = tokio::fs::read(file)
        .await
        .map_err(|source| ServerError::Resource {
            path: file.to_path_buf(),
            source,
        })?;

    tracing::info!(file = %file.display(), bytes = contents.len(), "JSON data found and read");
    Ok(Some(Bytes::from(contents)))
}
