use std::path::PathBuf;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:7000";
pub const DEFAULT_RESOURCE_DIR: &str = "resources";
pub const PROPERTIES_FILE: &str = "server.properties";

/// Process-level settings, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Built-in resource directory; holds `JSON_Files/` and named sub-resources.
    pub resource_dir: PathBuf,
    pub properties_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// `LISTEN`, `RESOURCE_DIR` and `SERVER_PROPERTIES` are consulted; the
    /// properties file defaults to `server.properties` inside the resource
    /// directory.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let resource_dir = lookup("RESOURCE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESOURCE_DIR));
        let properties_path = lookup("SERVER_PROPERTIES")
            .map(PathBuf::from)
            .unwrap_or_else(|| resource_dir.join(PROPERTIES_FILE));

        Self {
            listen_addr,
            resource_dir,
            properties_path,
        }
    }
}
