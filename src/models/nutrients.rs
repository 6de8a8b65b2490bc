use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

/// Calories plus the three tracked macros.
///
/// Used for per-serving catalog values, scaled cart values, running totals,
/// goal targets, and signed remaining deltas alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl Nutrients {
    pub fn new(calories: f64, protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fats,
        }
    }

    /// Multiply every field by `factor`.
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fats: self.fats * factor,
        }
    }

    /// True when any field is negative (over budget, for a remaining delta).
    pub fn any_negative(&self) -> bool {
        self.calories < 0.0 || self.protein < 0.0 || self.carbs < 0.0 || self.fats < 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.calories.is_finite()
            && self.protein.is_finite()
            && self.carbs.is_finite()
            && self.fats.is_finite()
    }
}

impl Add for Nutrients {
    type Output = Nutrients;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fats: self.fats + rhs.fats,
        }
    }
}

impl AddAssign for Nutrients {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Nutrients {
    type Output = Nutrients;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            calories: self.calories - rhs.calories,
            protein: self.protein - rhs.protein,
            carbs: self.carbs - rhs.carbs,
            fats: self.fats - rhs.fats,
        }
    }
}

impl Sum for Nutrients {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrients::default(), |acc, n| acc + n)
    }
}
