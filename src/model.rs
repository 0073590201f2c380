use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder-recipe.png";

/// Builds the stable identifier for the recipe at 0-based position `index`.
pub fn recipe_id(index: usize) -> String {
    format!("recipe_{:04}", index + 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cuisine {
    Indian,
    Chinese,
    Italian,
    Mexican,
    Thai,
    International,
}

impl Cuisine {
    pub const ALL: [Cuisine; 6] = [
        Cuisine::Indian,
        Cuisine::Chinese,
        Cuisine::Italian,
        Cuisine::Mexican,
        Cuisine::Thai,
        Cuisine::International,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Cuisine::Indian => "indian",
            Cuisine::Chinese => "chinese",
            Cuisine::Italian => "italian",
            Cuisine::Mexican => "mexican",
            Cuisine::Thai => "thai",
            Cuisine::International => "international",
        }
    }

    /// Name with the first letter upper-cased, as used in display titles
    pub fn display_name(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryTag {
    Vegetarian,
    Vegan,
    GlutenFree,
    Keto,
    LowCarb,
}

impl DietaryTag {
    pub const ALL: [DietaryTag; 5] = [
        DietaryTag::Vegetarian,
        DietaryTag::Vegan,
        DietaryTag::GlutenFree,
        DietaryTag::Keto,
        DietaryTag::LowCarb,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryTag::Vegetarian => "vegetarian",
            DietaryTag::Vegan => "vegan",
            DietaryTag::GlutenFree => "gluten-free",
            DietaryTag::Keto => "keto",
            DietaryTag::LowCarb => "low-carb",
        }
    }
}

impl fmt::Display for DietaryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(serialize_with = "serialize_quantity")]
    pub quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub substitutions: Vec<String>,
}

/// Largest integer an f64 holds exactly
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Writes whole quantities as JSON integers (`2`, not `2.0`)
fn serialize_quantity<S: Serializer>(quantity: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if quantity.fract() == 0.0 && quantity.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*quantity as i64)
    } else {
        serializer.serialize_f64(*quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    pub step: u32,
    pub text: String,
    /// Timer length in seconds
    #[serde(default)]
    pub timer_duration: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
    pub fiber: u32,
    pub sodium: u32,
    pub sugar: u32,
}

/// A fully normalized recipe as consumed by the Smart Meal app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub image: String,
    pub description: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub total_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub meal_type: MealType,
    pub cuisine: Cuisine,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<Instruction>,
    pub nutrition: Nutrition,
    pub dietary_tags: Vec<DietaryTag>,
    #[serde(default)]
    pub video_id: Option<String>,
}

/// A recipe record before normalization. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawRecipeInput {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub ingredients: Vec<String>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub keywords: Vec<String>,
    pub steps: Vec<String>,
    pub servings: Option<u32>,
    pub nutrition: Option<Nutrition>,
    pub video_id: Option<String>,
}
