//! # Schema Assembler
//!
//! Turns a [`RawRecipeInput`] into a finished [`Recipe`] by running its
//! free-text fields through the normalizer and classifier.

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::classify::{
    determine_difficulty, determine_meal_type, extract_cuisine, extract_dietary_tags,
};
use crate::model::{
    recipe_id, DietaryTag, Ingredient, Instruction, RawRecipeInput, Recipe, PLACEHOLDER_IMAGE,
};
use crate::normalize::{clean_ingredient_name, parse_time_minutes};

pub const DEFAULT_SERVINGS: u32 = 4;
pub const UNTITLED: &str = "Untitled Recipe";

lazy_static! {
    /// A number directly followed by a time unit, e.g. "simmer 10 minutes"
    static ref STEP_DURATION: Regex =
        Regex::new(r"(?i)\b([0-9]+)\s*(minutes?|mins?|hours?|hrs?)\b")
            .expect("Step duration pattern should be valid");
}

/// Build the recipe at 0-based position `index` from a raw record.
pub fn assemble_recipe(raw: &RawRecipeInput, index: usize) -> Recipe {
    let id = recipe_id(index);

    let title = match raw.name.trim() {
        "" => {
            warn!("{} has no name, using \"{}\"", id, UNTITLED);
            UNTITLED.to_string()
        }
        name => name.to_string(),
    };

    let prep_time = parse_time_minutes(raw.prep_time.as_deref());
    let cook_time = parse_time_minutes(raw.cook_time.as_deref());
    let total_time = prep_time.saturating_add(cook_time);

    let instructions = build_instructions(&raw.steps);
    let difficulty = determine_difficulty(instructions.len(), total_time);
    let meal_type = determine_meal_type(&raw.keywords, &raw.name);
    let cuisine = extract_cuisine(&raw.keywords, &raw.name);
    let dietary_tags = extract_dietary_tags(&raw.ingredients, &raw.keywords);

    let servings = match raw.servings {
        Some(servings) if servings > 0 => servings,
        _ => DEFAULT_SERVINGS,
    };

    let description = raw
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            format!(
                "A delicious {} {} dish",
                cuisine,
                meal_type.as_str().to_lowercase()
            )
        });

    let image = raw
        .image
        .as_deref()
        .filter(|i| !i.trim().is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE)
        .to_string();

    debug!(
        "Assembled {}: {}/{}/{} in {} min, tags [{}]",
        id,
        difficulty,
        meal_type,
        cuisine,
        total_time,
        dietary_tags
            .iter()
            .map(DietaryTag::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    );

    Recipe {
        id,
        title,
        image,
        description,
        prep_time,
        cook_time,
        total_time,
        servings,
        difficulty,
        meal_type,
        cuisine,
        ingredients: build_ingredients(&raw.ingredients),
        instructions,
        nutrition: raw.nutrition.clone().unwrap_or_default(),
        dietary_tags,
        video_id: raw.video_id.clone().filter(|v| !v.trim().is_empty()),
    }
}

fn build_ingredients(lines: &[String]) -> Vec<Ingredient> {
    lines
        .iter()
        .map(|line| clean_ingredient_name(line))
        .filter(|name| !name.is_empty())
        .map(|name| Ingredient {
            name,
            quantity: 1.0,
            unit: String::new(),
            substitutions: Vec::new(),
        })
        .collect()
}

fn build_instructions(steps: &[String]) -> Vec<Instruction> {
    steps
        .iter()
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .zip(1..)
        .map(|(text, step)| Instruction {
            step,
            text: text.to_string(),
            timer_duration: step_timer_seconds(text),
        })
        .collect()
}

/// Timer length in seconds for a step that mentions a duration.
///
/// Every "<number> <unit>" pair counts, so "1 hour 30 minutes" is 5400.
fn step_timer_seconds(text: &str) -> Option<u32> {
    let minutes = STEP_DURATION
        .captures_iter(text)
        .map(|caps| {
            // Digit-only capture, so the only parse failure is overflow
            let value = caps[1].parse::<u32>().unwrap_or(u32::MAX);
            if caps[2].to_lowercase().starts_with('h') {
                value.saturating_mul(60)
            } else {
                value
            }
        })
        .fold(0u32, u32::saturating_add);

    match minutes {
        0 => None,
        minutes => Some(minutes.saturating_mul(60)),
    }
}
