//! Translation table selection.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Table file extensions accepted when scanning a tables directory.
const TABLE_EXTENSIONS: [&str; 2] = ["ctb", "utb"];

/// Prefix of the table picked when nothing is configured.
const DEFAULT_TABLE_PREFIX: &str = "en-us";

/// Ordered list of translation tables handed to the port.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TableSet {
    names: Vec<String>,
}

impl TableSet {
    /// Create a table set from table names or paths.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// A table set with a single table.
    #[must_use]
    pub fn single(name: impl Into<String>) -> Self {
        Self {
            names: vec![name.into()],
        }
    }

    /// Table names in lookup order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The first table, used when reporting failures.
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Pick the default English table from a tables directory.
    ///
    /// Entries are sorted so the choice does not depend on directory order.
    pub fn discover_default(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut candidates = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let is_table = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| TABLE_EXTENSIONS.contains(&e));
            if is_table && name.starts_with(DEFAULT_TABLE_PREFIX) {
                candidates.push(path);
            }
        }
        candidates.sort();
        candidates
            .into_iter()
            .next()
            .map(|path| Self::single(path.to_string_lossy()))
            .ok_or_else(|| {
                Error::Configuration(format!(
                    "no {DEFAULT_TABLE_PREFIX} contraction table in {}",
                    dir.display()
                ))
            })
    }
}
