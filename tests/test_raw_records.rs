use smartmeal_preprocess::{
    preprocess_raw, Cuisine, DietaryTag, Difficulty, MealType, Preprocessor, RawRecipeInput,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_raw_records_from_json() {
    let json = r#"
    [
        {
            "name": "Fluffy Pancakes",
            "ingredients": ["2 cups flour", "1 cup milk", "2 eggs"],
            "prepTime": "10 min",
            "cookTime": "15 minutes",
            "keywords": ["Breakfast", "Sweet"],
            "steps": ["Whisk", "Rest 5 minutes", "Fry"],
            "servings": 4
        },
        {
            "name": "Vegetable Biryani",
            "ingredients": ["basmati rice", "carrots", "peas", "spices"],
            "prepTime": "30 mins",
            "cookTime": "1 hr",
            "keywords": ["gluten-free"]
        },
        {
            "name": "Bacon-Wrapped Steak Bites",
            "ingredients": ["beef sirloin", "bacon"],
            "cookTime": "20 minutes",
            "keywords": ["Appetizer", "low carb"]
        }
    ]
    "#;
    let raw: Vec<RawRecipeInput> = serde_json::from_str(json).unwrap();
    let recipes = preprocess_raw(raw);

    assert_eq!(recipes.len(), 3);

    let pancakes = &recipes[0];
    assert_eq!(pancakes.id, "recipe_0001");
    assert_eq!(pancakes.total_time, 25);
    assert_eq!(pancakes.difficulty, Difficulty::Easy);
    assert_eq!(pancakes.meal_type, MealType::Breakfast);
    assert_eq!(pancakes.cuisine, Cuisine::International);
    assert_eq!(pancakes.dietary_tags, vec![DietaryTag::Vegetarian]);
    assert_eq!(pancakes.instructions[1].timer_duration, Some(300));

    let biryani = &recipes[1];
    assert_eq!(biryani.prep_time, 30);
    assert_eq!(biryani.cook_time, 60);
    assert_eq!(biryani.difficulty, Difficulty::Hard);
    assert_eq!(biryani.meal_type, MealType::Lunch);
    assert_eq!(biryani.cuisine, Cuisine::Indian);
    assert_eq!(
        biryani.dietary_tags,
        vec![
            DietaryTag::Vegetarian,
            DietaryTag::Vegan,
            DietaryTag::GlutenFree
        ]
    );
    assert!(biryani.instructions.is_empty());

    let bites = &recipes[2];
    assert_eq!(bites.meal_type, MealType::Snack);
    assert_eq!(bites.difficulty, Difficulty::Easy);
    assert_eq!(bites.dietary_tags, vec![DietaryTag::Keto, DietaryTag::LowCarb]);
}

#[test]
fn test_raw_ingredient_names_are_normalized() {
    let raw = RawRecipeInput {
        name: "Salad".to_string(),
        ingredients: strings(&["A Ripe TOMATO!", "!!!", "The Olive Oil"]),
        ..Default::default()
    };
    let recipes = preprocess_raw(vec![raw]);
    let names: Vec<&str> = recipes[0]
        .ingredients
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(names, vec!["ripe tomato", "olive oil"]);
}

#[test]
fn test_builder_writes_raw_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recipes.json");
    let raw = RawRecipeInput {
        name: "Beef Tacos".to_string(),
        keywords: strings(&["Dinner"]),
        ..Default::default()
    };

    let output = Preprocessor::builder()
        .raw(vec![raw])
        .output(&path)
        .build()
        .unwrap();

    assert!(path.exists());
    assert_eq!(output.report.count("mexican"), 1);
    assert_eq!(output.recipes[0].meal_type, MealType::Dinner);
}
