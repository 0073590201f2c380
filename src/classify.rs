//! # Classifier
//!
//! Keyword-driven classification of recipes into difficulty, meal type,
//! cuisine and dietary tags. Tables are ordered: the first category with a
//! matching keyword wins. Matching is by substring on lowercased text.

use crate::model::{Cuisine, DietaryTag, Difficulty, MealType};

/// Meal types checked in priority order. Anything unmatched is lunch.
pub const MEAL_TYPE_KEYWORDS: &[(MealType, &[&str])] = &[
    (
        MealType::Breakfast,
        &["breakfast", "pancake", "waffle", "cereal", "oatmeal"],
    ),
    (MealType::Dinner, &["dinner", "main", "entree"]),
    (MealType::Snack, &["snack", "appetizer", "dessert"]),
];

pub const DEFAULT_MEAL_TYPE: MealType = MealType::Lunch;

/// Cuisines checked in priority order. Anything unmatched is international.
pub const CUISINE_KEYWORDS: &[(Cuisine, &[&str])] = &[
    (
        Cuisine::Indian,
        &["indian", "curry", "masala", "tandoori", "biryani"],
    ),
    (Cuisine::Chinese, &["chinese", "szechuan", "cantonese", "wok"]),
    (Cuisine::Italian, &["italian", "pasta", "pizza", "risotto"]),
    (
        Cuisine::Mexican,
        &["mexican", "taco", "burrito", "enchilada", "salsa"],
    ),
    (Cuisine::Thai, &["thai", "pad thai", "curry thai"]),
];

pub const DEFAULT_CUISINE: Cuisine = Cuisine::International;

const MEAT_KEYWORDS: &[&str] = &["chicken", "beef", "pork", "lamb", "meat", "fish", "seafood"];
const DAIRY_OR_EGG_KEYWORDS: &[&str] = &["milk", "cheese", "butter", "cream", "egg"];
const GLUTEN_FREE_KEYWORDS: &[&str] = &["gluten-free", "gluten free"];
const LOW_CARB_KEYWORDS: &[&str] = &["low-carb", "low carb"];
const KETO_KEYWORD: &str = "keto";

const EASY_MAX_STEPS: usize = 5;
const EASY_MAX_MINUTES: u32 = 30;
const MEDIUM_MAX_STEPS: usize = 10;
const MEDIUM_MAX_MINUTES: u32 = 60;

/// Grade a recipe by how many steps it has and how long it takes.
pub fn determine_difficulty(step_count: usize, total_time: u32) -> Difficulty {
    if step_count <= EASY_MAX_STEPS && total_time <= EASY_MAX_MINUTES {
        Difficulty::Easy
    } else if step_count <= MEDIUM_MAX_STEPS && total_time <= MEDIUM_MAX_MINUTES {
        Difficulty::Medium
    } else {
        Difficulty::Hard
    }
}

/// Determine meal type from keywords and recipe name
pub fn determine_meal_type<S: AsRef<str>>(keywords: &[S], name: &str) -> MealType {
    let text = search_text(keywords, name);
    first_match(MEAL_TYPE_KEYWORDS, &text).unwrap_or(DEFAULT_MEAL_TYPE)
}

/// Extract cuisine from keywords and recipe name
pub fn extract_cuisine<S: AsRef<str>>(keywords: &[S], name: &str) -> Cuisine {
    let text = search_text(keywords, name);
    first_match(CUISINE_KEYWORDS, &text).unwrap_or(DEFAULT_CUISINE)
}

/// Derive dietary tags from ingredient lines and keywords.
///
/// Tags come back in a fixed order: vegetarian, vegan, gluten-free, keto,
/// low-carb. A "low carb" keyword produces both keto and low-carb.
pub fn extract_dietary_tags<I: AsRef<str>, K: AsRef<str>>(
    ingredients: &[I],
    keywords: &[K],
) -> Vec<DietaryTag> {
    let ingredients_text = join_lowercase(ingredients);
    let keywords_text = join_lowercase(keywords);

    let has_meat = contains_any(&ingredients_text, MEAT_KEYWORDS);
    let has_dairy_or_egg = contains_any(&ingredients_text, DAIRY_OR_EGG_KEYWORDS);
    let low_carb = contains_any(&keywords_text, LOW_CARB_KEYWORDS);

    let mut tags = Vec::new();
    if !has_meat {
        tags.push(DietaryTag::Vegetarian);
    }
    if !has_meat && !has_dairy_or_egg {
        tags.push(DietaryTag::Vegan);
    }
    if contains_any(&keywords_text, GLUTEN_FREE_KEYWORDS) {
        tags.push(DietaryTag::GlutenFree);
    }
    if keywords_text.contains(KETO_KEYWORD) || low_carb {
        tags.push(DietaryTag::Keto);
    }
    if low_carb {
        tags.push(DietaryTag::LowCarb);
    }
    tags
}

fn first_match<T: Copy>(table: &[(T, &[&str])], text: &str) -> Option<T> {
    table
        .iter()
        .find(|(_, keywords)| contains_any(text, keywords))
        .map(|(category, _)| *category)
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

fn join_lowercase<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(|part| part.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn search_text<S: AsRef<str>>(keywords: &[S], name: &str) -> String {
    format!("{} {}", join_lowercase(keywords), name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_difficulty_thresholds() {
        assert_eq!(determine_difficulty(5, 30), Difficulty::Easy);
        assert_eq!(determine_difficulty(6, 30), Difficulty::Medium);
        assert_eq!(determine_difficulty(5, 31), Difficulty::Medium);
        assert_eq!(determine_difficulty(10, 60), Difficulty::Medium);
        assert_eq!(determine_difficulty(11, 10), Difficulty::Hard);
        assert_eq!(determine_difficulty(3, 61), Difficulty::Hard);
        assert_eq!(determine_difficulty(12, 90), Difficulty::Hard);
    }

    #[test]
    fn test_easy_region() {
        for steps in 0..=5 {
            for time in 0..=30 {
                assert_eq!(determine_difficulty(steps, time), Difficulty::Easy);
            }
        }
    }

    #[test]
    fn test_meal_type_priority() {
        assert_eq!(
            determine_meal_type(&["breakfast special"], "Morning Oats"),
            MealType::Breakfast
        );
        assert_eq!(determine_meal_type(&NONE, "Grilled Chicken"), MealType::Lunch);
        // Breakfast outranks dinner and snack
        assert_eq!(
            determine_meal_type(&["dessert", "dinner"], "Pancake Stack"),
            MealType::Breakfast
        );
        assert_eq!(
            determine_meal_type(&["Appetizer", "Main Course"], "Wings"),
            MealType::Dinner
        );
        assert_eq!(determine_meal_type(&["DESSERT"], "Brownies"), MealType::Snack);
    }

    #[test]
    fn test_meal_type_matches_substrings() {
        // "main" is found inside "remaining"
        assert_eq!(
            determine_meal_type(&NONE, "Remaining Greens Salad"),
            MealType::Dinner
        );
    }

    #[test]
    fn test_cuisine() {
        assert_eq!(extract_cuisine(&NONE, "Chicken Tikka Masala"), Cuisine::Indian);
        assert_eq!(extract_cuisine(&["Szechuan"], "Noodles"), Cuisine::Chinese);
        assert_eq!(extract_cuisine(&NONE, "Mushroom Risotto"), Cuisine::Italian);
        assert_eq!(extract_cuisine(&["taco night"], "Fish"), Cuisine::Mexican);
        assert_eq!(extract_cuisine(&NONE, "Pad Thai"), Cuisine::Thai);
        assert_eq!(extract_cuisine(&NONE, "Shepherd's Pie"), Cuisine::International);
    }

    #[test]
    fn test_cuisine_table_order_breaks_ties() {
        // "curry" is indian before it can be thai
        assert_eq!(extract_cuisine(&["thai"], "Green Curry"), Cuisine::Indian);
        assert_eq!(extract_cuisine(&["pizza"], "Taco Pizza"), Cuisine::Italian);
    }

    #[test]
    fn test_dietary_plant_based() {
        assert_eq!(
            extract_dietary_tags(&["lentils", "rice"], &NONE),
            vec![DietaryTag::Vegetarian, DietaryTag::Vegan]
        );
    }

    #[test]
    fn test_dietary_meat_and_dairy() {
        assert!(extract_dietary_tags(&["Chicken Thighs", "rice"], &NONE).is_empty());
        assert_eq!(
            extract_dietary_tags(&["2 Eggs", "spinach"], &NONE),
            vec![DietaryTag::Vegetarian]
        );
    }

    #[test]
    fn test_dietary_keywords() {
        assert_eq!(
            extract_dietary_tags(&["beef"], &["Gluten Free"]),
            vec![DietaryTag::GlutenFree]
        );
        assert_eq!(extract_dietary_tags(&["pork"], &["KETO"]), vec![DietaryTag::Keto]);
    }

    #[test]
    fn test_dietary_low_carb_adds_keto_too() {
        assert_eq!(
            extract_dietary_tags(&["salmon fish"], &["low carb"]),
            vec![DietaryTag::Keto, DietaryTag::LowCarb]
        );
        assert_eq!(
            extract_dietary_tags(&["tofu"], &["gluten-free", "low-carb"]),
            vec![
                DietaryTag::Vegetarian,
                DietaryTag::Vegan,
                DietaryTag::GlutenFree,
                DietaryTag::Keto,
                DietaryTag::LowCarb,
            ]
        );
    }

    #[test]
    fn test_dietary_tags_never_repeat() {
        let tags = extract_dietary_tags(&["tofu"], &["keto", "low carb", "low-carb"]);
        let mut deduped = tags.clone();
        deduped.dedup();
        assert_eq!(tags, deduped);
    }
}
