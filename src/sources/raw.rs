use std::iter::Enumerate;
use std::vec::IntoIter;

use super::RecipeSource;
use crate::assemble::assemble_recipe;
use crate::model::{RawRecipeInput, Recipe};

/// Runs in-memory raw records through normalization and classification
pub struct RawSource {
    records: Enumerate<IntoIter<RawRecipeInput>>,
}

impl RawSource {
    pub fn new(records: Vec<RawRecipeInput>) -> Self {
        Self {
            records: records.into_iter().enumerate(),
        }
    }
}

impl Iterator for RawSource {
    type Item = Recipe;

    fn next(&mut self) -> Option<Recipe> {
        self.records
            .next()
            .map(|(index, raw)| assemble_recipe(&raw, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

impl RecipeSource for RawSource {
    fn source_name(&self) -> &str {
        "raw"
    }
}
