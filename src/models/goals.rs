use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::constants::{
    DEFAULT_CALORIE_GOAL, DEFAULT_CARBS_PERCENTAGE, DEFAULT_FATS_PERCENTAGE,
    DEFAULT_PROTEIN_PERCENTAGE,
};
use crate::models::Nutrients;

/// One of the three tracked macro-nutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacroField {
    Protein,
    Carbs,
    Fats,
}

impl MacroField {
    pub const ALL: [MacroField; 3] = [MacroField::Protein, MacroField::Carbs, MacroField::Fats];
}

impl fmt::Display for MacroField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MacroField::Protein => write!(f, "Protein"),
            MacroField::Carbs => write!(f, "Carbs"),
            MacroField::Fats => write!(f, "Fats"),
        }
    }
}

/// User-entered daily goal: a calorie budget split by percentage.
///
/// Percentages are expected in `[0, 100]` but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacroGoalInput {
    pub calories: f64,
    pub protein_percentage: f64,
    pub carbs_percentage: f64,
    pub fats_percentage: f64,
}

impl Default for MacroGoalInput {
    fn default() -> Self {
        Self {
            calories: DEFAULT_CALORIE_GOAL,
            protein_percentage: DEFAULT_PROTEIN_PERCENTAGE,
            carbs_percentage: DEFAULT_CARBS_PERCENTAGE,
            fats_percentage: DEFAULT_FATS_PERCENTAGE,
        }
    }
}

impl MacroGoalInput {
    pub fn new(calories: f64, protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            calories,
            protein_percentage: protein,
            carbs_percentage: carbs,
            fats_percentage: fats,
        }
    }

    pub fn percentage(&self, field: MacroField) -> f64 {
        match field {
            MacroField::Protein => self.protein_percentage,
            MacroField::Carbs => self.carbs_percentage,
            MacroField::Fats => self.fats_percentage,
        }
    }

    pub fn percentage_mut(&mut self, field: MacroField) -> &mut f64 {
        match field {
            MacroField::Protein => &mut self.protein_percentage,
            MacroField::Carbs => &mut self.carbs_percentage,
            MacroField::Fats => &mut self.fats_percentage,
        }
    }

    /// Sum of the three macro percentages.
    #[inline]
    pub fn percentage_sum(&self) -> f64 {
        self.protein_percentage + self.carbs_percentage + self.fats_percentage
    }
}

/// Gram targets derived from a [`MacroGoalInput`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroGoalOutput {
    /// Calorie goal, passed through unrounded.
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl MacroGoalOutput {
    pub fn grams(&self, field: MacroField) -> f64 {
        match field {
            MacroField::Protein => self.protein,
            MacroField::Carbs => self.carbs,
            MacroField::Fats => self.fats,
        }
    }

    pub fn as_nutrients(&self) -> Nutrients {
        Nutrients::new(self.calories, self.protein, self.carbs, self.fats)
    }
}
