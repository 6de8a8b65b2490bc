use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::models::Nutrients;

/// Unit a food's serving size (and a cart quantity) is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServingSizeUnit {
    #[serde(rename = "g", alias = "grams")]
    Grams,
    #[serde(rename = "item")]
    Item,
}

impl fmt::Display for ServingSizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServingSizeUnit::Grams => write!(f, "g"),
            ServingSizeUnit::Item => write!(f, "item"),
        }
    }
}

/// A catalog food with nutrient values per `serving_size` `serving_size_unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecord {
    pub id: String,
    pub name: String,
    pub serving_size: f64,
    pub serving_size_unit: ServingSizeUnit,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl FoodRecord {
    /// Nutrients for one reference serving.
    #[inline]
    pub fn per_serving(&self) -> Nutrients {
        Nutrients::new(self.calories, self.protein, self.carbs, self.fats)
    }

    /// Check the serving size is usable as a divisor.
    pub fn check_serving_size(&self) -> Result<()> {
        if self.serving_size.is_finite() && self.serving_size > 0.0 {
            Ok(())
        } else {
            Err(TrackerError::InvalidServingSize {
                id: self.id.clone(),
                serving_size: self.serving_size,
            })
        }
    }

    /// Full record validation applied at catalog load.
    pub fn validate(&self) -> Result<()> {
        self.check_serving_size()?;

        let nutrients = self.per_serving();
        if !nutrients.is_finite()
            || self.calories < 0.0
            || self.protein < 0.0
            || self.carbs < 0.0
            || self.fats < 0.0
        {
            return Err(TrackerError::InvalidInput(format!(
                "food '{}' has negative or non-numeric nutrient values",
                self.id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> FoodRecord {
        FoodRecord {
            id: "rice".to_string(),
            name: "White Rice".to_string(),
            serving_size: 100.0,
            serving_size_unit: ServingSizeUnit::Grams,
            calories: 130.0,
            protein: 2.7,
            carbs: 28.0,
            fats: 0.3,
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample_food().validate().is_ok());
    }

    #[test]
    fn test_zero_serving_size_rejected() {
        let mut food = sample_food();
        food.serving_size = 0.0;
        assert!(matches!(
            food.validate(),
            Err(TrackerError::InvalidServingSize { .. })
        ));

        food.serving_size = f64::NAN;
        assert!(food.check_serving_size().is_err());
    }

    #[test]
    fn test_negative_nutrient_rejected() {
        let mut food = sample_food();
        food.fats = -1.0;
        assert!(matches!(food.validate(), Err(TrackerError::InvalidInput(_))));
    }

    #[test]
    fn test_json_field_names() {
        let json = r#"{"id":"egg","name":"Egg","servingSize":1,"servingSizeUnit":"item",
            "calories":78,"protein":6.3,"carbs":0.6,"fats":5.3}"#;
        let food: FoodRecord = serde_json::from_str(json).unwrap();
        assert_eq!(food.serving_size_unit, ServingSizeUnit::Item);
        assert_eq!(food.serving_size, 1.0);
        assert_eq!(food.serving_size_unit.to_string(), "item");
    }
}
