use log::info;
use std::path::PathBuf;

use crate::sink::{write_recipes, CuisineReport};
use crate::sources::{RawSource, RecipeSource, SampleGenerator};
use crate::{PreprocessError, RawRecipeInput, Recipe};

/// Represents the input source for a preprocessing run
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Generate this many synthetic recipes
    Sample(usize),
    /// Normalize and classify these raw records
    Raw(Vec<RawRecipeInput>),
}

/// Result of a preprocessing run
#[derive(Debug, Clone)]
pub struct PreprocessOutput {
    /// All recipes, in id order
    pub recipes: Vec<Recipe>,
    /// Per-cuisine counts for `recipes`
    pub report: CuisineReport,
    /// Path the dataset was written to, if an output was set
    pub written_to: Option<PathBuf>,
}

/// Builder for configuring and executing a preprocessing run
#[derive(Debug, Default)]
pub struct PreprocessorBuilder {
    source: Option<InputSource>,
    seed: Option<u64>,
    output: Option<PathBuf>,
}

impl PreprocessorBuilder {
    /// Generate `count` synthetic recipes
    ///
    /// # Example
    /// ```
    /// use smartmeal_preprocess::Preprocessor;
    ///
    /// let output = Preprocessor::builder().sample(3).seed(1).build().unwrap();
    /// assert_eq!(output.recipes.len(), 3);
    /// ```
    pub fn sample(mut self, count: usize) -> Self {
        self.source = Some(InputSource::Sample(count));
        self
    }

    /// Normalize raw recipe records instead of generating samples
    ///
    /// # Example
    /// ```
    /// use smartmeal_preprocess::{Preprocessor, RawRecipeInput};
    ///
    /// let raw = RawRecipeInput {
    ///     name: "Veggie Pizza".to_string(),
    ///     ..Default::default()
    /// };
    /// let output = Preprocessor::builder().raw(vec![raw]).build().unwrap();
    /// assert_eq!(output.recipes[0].cuisine.as_str(), "italian");
    /// ```
    pub fn raw(mut self, records: Vec<RawRecipeInput>) -> Self {
        self.source = Some(InputSource::Raw(records));
        self
    }

    /// Seed the sample generator. Ignored for raw input.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Write the dataset to `path` after processing
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Build and execute the preprocessing run
    ///
    /// # Errors
    /// Returns `PreprocessError` if:
    /// - No input source was specified
    /// - The output file cannot be written
    pub fn build(self) -> Result<PreprocessOutput, PreprocessError> {
        let source = self.source.ok_or_else(|| {
            PreprocessError::Builder(
                "No input source specified. Use .sample() or .raw()".to_string(),
            )
        })?;

        let recipes = match source {
            InputSource::Sample(count) => match self.seed {
                Some(seed) => collect(SampleGenerator::seeded(count, seed)),
                None => collect(SampleGenerator::from_entropy(count)),
            },
            InputSource::Raw(records) => collect(RawSource::new(records)),
        };

        if let Some(path) = &self.output {
            write_recipes(path, &recipes)?;
        }

        let report = CuisineReport::from_recipes(&recipes);
        Ok(PreprocessOutput {
            recipes,
            report,
            written_to: self.output,
        })
    }
}

fn collect<S: RecipeSource>(source: S) -> Vec<Recipe> {
    let name = source.source_name().to_string();
    let recipes: Vec<Recipe> = source.collect();
    info!("Collected {} recipes from {} source", recipes.len(), name);
    recipes
}

/// Main entry point for the builder API
pub struct Preprocessor;

impl Preprocessor {
    /// Creates a new builder for a preprocessing run
    pub fn builder() -> PreprocessorBuilder {
        PreprocessorBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_is_an_error() {
        let result = Preprocessor::builder().seed(3).build();
        assert!(matches!(result, Err(PreprocessError::Builder(_))));
    }

    #[test]
    fn test_no_output_writes_nothing() {
        let output = Preprocessor::builder().sample(4).seed(3).build().unwrap();
        assert_eq!(output.recipes.len(), 4);
        assert_eq!(output.report.total(), 4);
        assert!(output.written_to.is_none());
    }

    #[test]
    fn test_last_source_wins() {
        let output = Preprocessor::builder()
            .sample(10)
            .raw(vec![RawRecipeInput::default()])
            .build()
            .unwrap();
        assert_eq!(output.recipes.len(), 1);
    }
}
