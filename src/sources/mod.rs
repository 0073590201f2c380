mod raw;
mod sample;

pub use raw::RawSource;
pub use sample::SampleGenerator;

use crate::model::Recipe;

/// A provider of finished recipes, yielded one at a time in id order
pub trait RecipeSource: Iterator<Item = Recipe> {
    /// Short name for logs (e.g., "sample", "raw")
    fn source_name(&self) -> &str;
}
