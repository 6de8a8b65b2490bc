use serde::Serialize;

use crate::models::FoodRecord;

/// A food in the cart with the quantity chosen for it.
///
/// `quantity` is in the food's `serving_size_unit`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartEntry {
    pub food: FoodRecord,
    pub quantity: f64,
}

impl CartEntry {
    pub fn new(food: FoodRecord, quantity: f64) -> Self {
        Self { food, quantity }
    }

    pub fn name(&self) -> &str {
        &self.food.name
    }
}
