//! # smartmeal-preprocess
//!
//! Builds the recipe dataset consumed by the Smart Meal app. Records come
//! from a synthetic generator or from raw in-memory input, pass through
//! normalization and keyword classification, and are written out as a
//! fixed-schema JSON array.

pub mod assemble;
pub mod builder;
pub mod classify;
pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod sink;
pub mod sources;

pub use builder::{InputSource, PreprocessOutput, Preprocessor, PreprocessorBuilder};
pub use config::PreprocessConfig;
pub use error::PreprocessError;
pub use model::{
    Cuisine, DietaryTag, Difficulty, Ingredient, Instruction, MealType, Nutrition,
    RawRecipeInput, Recipe,
};
pub use sink::{write_recipes, CuisineReport};

use sources::{RawSource, SampleGenerator};

/// Generate `count` sample recipes, reproducibly when `seed` is given.
pub fn generate_sample_recipes(count: usize, seed: Option<u64>) -> Vec<Recipe> {
    match seed {
        Some(seed) => SampleGenerator::seeded(count, seed).collect(),
        None => SampleGenerator::from_entropy(count).collect(),
    }
}

/// Normalize and classify raw records into finished recipes.
pub fn preprocess_raw(records: Vec<RawRecipeInput>) -> Vec<Recipe> {
    RawSource::new(records).collect()
}
