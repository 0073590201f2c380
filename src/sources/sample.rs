use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::RecipeSource;
use crate::model::{
    recipe_id, Cuisine, DietaryTag, Difficulty, Ingredient, Instruction, MealType, Nutrition,
    Recipe, PLACEHOLDER_IMAGE,
};

/// Synthetic recipe generator.
///
/// Draws categories uniformly and fills a fixed three-ingredient,
/// three-step template. The random source is injected so a seeded
/// generator always yields the same records.
pub struct SampleGenerator<R> {
    rng: R,
    count: usize,
    index: usize,
}

impl<R: Rng> SampleGenerator<R> {
    pub fn new(count: usize, rng: R) -> Self {
        Self {
            rng,
            count,
            index: 0,
        }
    }

    fn generate(&mut self, index: usize) -> Recipe {
        let cuisine = pick(&mut self.rng, &Cuisine::ALL);
        let difficulty = pick(&mut self.rng, &Difficulty::ALL);
        let meal_type = pick(&mut self.rng, &MealType::ALL);

        let prep_time = self.rng.gen_range(5..=30);
        let cook_time = self.rng.gen_range(10..=90);
        let servings = self.rng.gen_range(2..=6);

        let nutrition = Nutrition {
            calories: self.rng.gen_range(200..=800),
            protein: self.rng.gen_range(10..=50),
            carbs: self.rng.gen_range(20..=100),
            fats: self.rng.gen_range(5..=40),
            fiber: self.rng.gen_range(2..=15),
            sodium: self.rng.gen_range(200..=1500),
            sugar: self.rng.gen_range(2..=25),
        };

        let tag_count = self.rng.gen_range(0..=2);
        let dietary_tags = DietaryTag::ALL
            .choose_multiple(&mut self.rng, tag_count)
            .copied()
            .collect();

        Recipe {
            id: recipe_id(index),
            title: format!(
                "Sample {} {} Recipe {}",
                cuisine.display_name(),
                meal_type,
                index + 1
            ),
            image: PLACEHOLDER_IMAGE.to_string(),
            description: format!(
                "A delicious {} {} dish",
                cuisine,
                meal_type.as_str().to_lowercase()
            ),
            prep_time,
            cook_time,
            total_time: prep_time + cook_time,
            servings,
            difficulty,
            meal_type,
            cuisine,
            ingredients: template_ingredients(),
            instructions: template_instructions(),
            nutrition,
            dietary_tags,
            video_id: None,
        }
    }
}

impl SampleGenerator<StdRng> {
    /// Generator whose output is fully determined by `seed`
    pub fn seeded(count: usize, seed: u64) -> Self {
        Self::new(count, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(count: usize) -> Self {
        Self::new(count, StdRng::from_entropy())
    }
}

impl<R: Rng> Iterator for SampleGenerator<R> {
    type Item = Recipe;

    fn next(&mut self) -> Option<Recipe> {
        if self.index >= self.count {
            return None;
        }
        let recipe = self.generate(self.index);
        self.index += 1;
        debug!("Generated {} ({})", recipe.id, recipe.title);
        Some(recipe)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl<R: Rng> RecipeSource for SampleGenerator<R> {
    fn source_name(&self) -> &str {
        "sample"
    }
}

fn pick<R: Rng, T: Copy>(rng: &mut R, choices: &[T]) -> T {
    choices[rng.gen_range(0..choices.len())]
}

fn template_ingredients() -> Vec<Ingredient> {
    [("ingredient1", 2.0, "cups"), ("ingredient2", 1.0, "tbsp"), ("ingredient3", 500.0, "g")]
        .into_iter()
        .map(|(name, quantity, unit)| Ingredient {
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
            substitutions: Vec::new(),
        })
        .collect()
}

fn template_instructions() -> Vec<Instruction> {
    [
        ("Prepare all ingredients", None),
        ("Cook for 20 minutes", Some(1200)),
        ("Serve hot", None),
    ]
    .into_iter()
    .zip(1..)
    .map(|((text, timer_duration), step)| Instruction {
        step,
        text: text.to_string(),
        timer_duration,
    })
    .collect()
}
