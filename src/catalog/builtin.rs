use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::models::{FoodRecord, ServingSizeUnit};

#[allow(clippy::too_many_arguments)]
fn food(
    id: &str,
    name: &str,
    serving_size: f64,
    serving_size_unit: ServingSizeUnit,
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
) -> FoodRecord {
    FoodRecord {
        id: id.to_string(),
        name: name.to_string(),
        serving_size,
        serving_size_unit,
        calories,
        protein,
        carbs,
        fats,
    }
}

/// Records of the catalog shipped with the binary.
pub fn builtin_foods() -> Vec<FoodRecord> {
    use ServingSizeUnit::{Grams, Item};

    vec![
        food("chicken-breast", "Chicken Breast", 100.0, Grams, 165.0, 31.0, 0.0, 3.6),
        food("salmon", "Salmon", 100.0, Grams, 208.0, 20.0, 0.0, 13.0),
        food("ground-beef", "Ground Beef (90% lean)", 100.0, Grams, 176.0, 20.0, 0.0, 10.0),
        food("tofu", "Tofu (firm)", 100.0, Grams, 144.0, 17.0, 3.0, 9.0),
        food("egg", "Egg", 1.0, Item, 78.0, 6.3, 0.6, 5.3),
        food("greek-yogurt", "Greek Yogurt", 100.0, Grams, 59.0, 10.0, 3.6, 0.4),
        food("cottage-cheese", "Cottage Cheese", 100.0, Grams, 98.0, 11.0, 3.4, 4.3),
        food("whey", "Whey Protein Scoop", 1.0, Item, 120.0, 24.0, 3.0, 1.5),
        food("white-rice", "White Rice (cooked)", 100.0, Grams, 130.0, 2.7, 28.0, 0.3),
        food("brown-rice", "Brown Rice (cooked)", 100.0, Grams, 112.0, 2.3, 24.0, 0.8),
        food("oats", "Rolled Oats", 40.0, Grams, 150.0, 5.0, 27.0, 3.0),
        food("pasta", "Pasta (cooked)", 100.0, Grams, 158.0, 5.8, 31.0, 0.9),
        food("bread", "Whole Wheat Bread", 1.0, Item, 81.0, 4.0, 13.8, 1.1),
        food("sweet-potato", "Sweet Potato", 100.0, Grams, 86.0, 1.6, 20.0, 0.1),
        food("banana", "Banana", 1.0, Item, 105.0, 1.3, 27.0, 0.4),
        food("apple", "Apple", 1.0, Item, 95.0, 0.5, 25.0, 0.3),
        food("broccoli", "Broccoli", 100.0, Grams, 34.0, 2.8, 7.0, 0.4),
        food("spinach", "Spinach", 100.0, Grams, 23.0, 2.9, 3.6, 0.4),
        food("avocado", "Avocado", 1.0, Item, 240.0, 3.0, 12.8, 22.0),
        food("almonds", "Almonds", 28.0, Grams, 164.0, 6.0, 6.1, 14.2),
        food("peanut-butter", "Peanut Butter", 32.0, Grams, 188.0, 8.0, 6.0, 16.0),
        food("olive-oil", "Olive Oil", 14.0, Grams, 119.0, 0.0, 0.0, 13.5),
        food("milk", "Milk (2%)", 244.0, Grams, 122.0, 8.1, 11.7, 4.8),
        food("cheddar", "Cheddar Cheese", 28.0, Grams, 113.0, 7.0, 0.4, 9.3),
    ]
}

/// The catalog used when no catalog file is configured.
pub fn builtin_catalog() -> Result<FoodCatalog> {
    FoodCatalog::new(builtin_foods())
}
