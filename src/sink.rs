//! # Sink
//!
//! Writes the finished dataset as pretty-printed JSON and summarizes it.

use log::info;
use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::error::PreprocessError;
use crate::model::Recipe;

/// Serialize `recipes` to `path` as a JSON array.
///
/// The document is written to a temporary file beside `path` and renamed
/// into place, so the target is either fully replaced or left untouched.
/// The destination directory must already exist.
pub fn write_recipes(path: &Path, recipes: &[Recipe]) -> Result<(), PreprocessError> {
    let json = serde_json::to_string_pretty(recipes)?;

    let write_error = |source: std::io::Error| PreprocessError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(json.as_bytes()).map_err(write_error)?;
    file.write_all(b"\n").map_err(write_error)?;
    file.as_file().sync_all().map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;

    info!("Wrote {} recipes to {}", recipes.len(), path.display());
    Ok(())
}

/// Recipe counts per cuisine, ordered alphabetically by cuisine name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CuisineReport {
    counts: BTreeMap<&'static str, usize>,
}

impl CuisineReport {
    pub fn from_recipes(recipes: &[Recipe]) -> Self {
        let mut counts = BTreeMap::new();
        for recipe in recipes {
            *counts.entry(recipe.cuisine.as_str()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn count(&self, cuisine: &str) -> usize {
        self.counts.get(cuisine).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// (cuisine, count) pairs in alphabetical order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        self.counts.iter().map(|(cuisine, count)| (*cuisine, *count))
    }
}

impl fmt::Display for CuisineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recipes by cuisine:")?;
        for (cuisine, count) in self.entries() {
            writeln!(f, "  {}: {}", cuisine, count)?;
        }
        Ok(())
    }
}
