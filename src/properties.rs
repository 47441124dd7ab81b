//! Key=value mapping loaded once at startup.
//!
//! Every key except [`JSON_FILE_LOCATION`] maps a request path to the name
//! of a JSON file in the resource directory.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Result, ServerError};

/// Key selecting the directory JSON files are read from.
pub const JSON_FILE_LOCATION: &str = "json.file.location";

/// Immutable path-to-filename table.
#[derive(Debug, Clone, Default)]
pub struct Properties {
    entries: HashMap<String, String>,
}

impl Properties {
    /// Reads and parses the file at `path`.
    ///
    /// Fails when the file cannot be read or when it yields no entries, so a
    /// loaded mapping is never empty.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ServerError::ConfigLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let properties = Self::parse(&text);
        if properties.is_empty() {
            return Err(ServerError::EmptyConfig(path.to_path_buf()));
        }

        tracing::info!(path = %path.display(), entries = properties.len(), "Server properties loaded");
        Ok(properties)
    }

    /// Parses properties text.
    ///
    /// Supports `#`/`!` comments, `=`, `:` or whitespace separators,
    /// backslash line continuations and the usual escapes including
    /// `\uXXXX`. Later duplicates win.
    pub fn parse(text: &str) -> Self {
        let mut entries = HashMap::new();
        let mut lines = text.lines();

        while let Some(line) = lines.next() {
            let line = line.trim_start();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let mut logical = line.to_string();
            while continues(&logical) {
                logical.pop();
                match lines.next() {
                    Some(next) => logical.push_str(next.trim_start()),
                    None => break,
                }
            }

            let (key, value) = split_entry(&logical);
            entries.insert(unescape(key), unescape(value));
        }

        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|v| v.as_str())
    }

    /// Overrides or adds an entry. Only meaningful before the mapping is
    /// shared with a running server.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw value of [`JSON_FILE_LOCATION`], if configured.
    pub fn json_file_location(&self) -> Option<&str> {
        self.get(JSON_FILE_LOCATION)
    }
}

/// An odd number of trailing backslashes joins the next line.
fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if c.is_whitespace() => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let rest = line[key_end..].trim_start();
    let value = match rest.strip_prefix('=').or_else(|| rest.strip_prefix(':')) {
        Some(after) => after.trim_start(),
        None => rest,
    };

    (&line[..key_end], value)
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000C}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    // malformed escape, keep it literally
                    None => {
                        out.push('u');
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    out
}
