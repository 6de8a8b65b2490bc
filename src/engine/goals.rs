use tracing::{debug, info};

use crate::engine::constants::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FATS, KCAL_PER_GRAM_PROTEIN, PERCENTAGE_TOTAL,
};
use crate::models::{MacroField, MacroGoalInput, MacroGoalOutput};

/// Round a gram target to the nearest whole gram, halves away from zero.
///
/// This is the only place goal outputs are rounded.
#[inline]
pub fn round_grams(value: f64) -> f64 {
    value.round()
}

/// Energy density for a macro (kcal per gram).
pub fn kcal_per_gram(field: MacroField) -> f64 {
    match field {
        MacroField::Protein => KCAL_PER_GRAM_PROTEIN,
        MacroField::Carbs => KCAL_PER_GRAM_CARBS,
        MacroField::Fats => KCAL_PER_GRAM_FATS,
    }
}

/// Gram target for a single macro, before rounding.
///
/// `calories * percentage / 100 / kcal_per_gram`.
pub fn macro_grams(calories: f64, percentage: f64, field: MacroField) -> f64 {
    let macro_calories = calories * percentage / PERCENTAGE_TOTAL;
    macro_calories / kcal_per_gram(field)
}

/// Derive rounded gram targets from a goal input.
///
/// Out-of-range percentages and zero or negative calories are not rejected;
/// they flow through to zero or negative targets.
pub fn derive_goal_output(input: &MacroGoalInput) -> MacroGoalOutput {
    let grams = |field| round_grams(macro_grams(input.calories, input.percentage(field), field));

    MacroGoalOutput {
        calories: input.calories,
        protein: grams(MacroField::Protein),
        carbs: grams(MacroField::Carbs),
        fats: grams(MacroField::Fats),
    }
}

/// True when the three percentages do not sum to exactly 100.
#[inline]
pub fn needs_adjustment(input: &MacroGoalInput) -> bool {
    input.percentage_sum() != PERCENTAGE_TOTAL
}

/// Proportionally rescale the percentages so they sum to (about) 100.
///
/// Each percentage is multiplied by `100 / sum` and rounded to the nearest
/// integer, so the result can still be off by one (e.g. three thirds give 99).
/// A zero sum has no defined ratio and leaves the input unchanged.
pub fn normalize_percentages(input: &MacroGoalInput) -> MacroGoalInput {
    let total = input.percentage_sum();
    if total == 0.0 {
        return *input;
    }

    let ratio = PERCENTAGE_TOTAL / total;
    MacroGoalInput {
        calories: input.calories,
        protein_percentage: (input.protein_percentage * ratio).round(),
        carbs_percentage: (input.carbs_percentage * ratio).round(),
        fats_percentage: (input.fats_percentage * ratio).round(),
    }
}

/// Holds the user's goal input and keeps the derived gram targets current.
///
/// Percentage edits are independent: setting one field never touches the
/// other two. The sum may drift away from 100, which [`needs_adjustment`]
/// reports, and only an explicit [`MacroGoalEngine::normalize`] repairs it.
#[derive(Debug, Clone)]
pub struct MacroGoalEngine {
    input: MacroGoalInput,
    output: MacroGoalOutput,
}

impl Default for MacroGoalEngine {
    fn default() -> Self {
        Self::new(MacroGoalInput::default())
    }
}

impl MacroGoalEngine {
    pub fn new(input: MacroGoalInput) -> Self {
        Self {
            output: derive_goal_output(&input),
            input,
        }
    }

    pub fn input(&self) -> &MacroGoalInput {
        &self.input
    }

    pub fn output(&self) -> &MacroGoalOutput {
        &self.output
    }

    pub fn needs_adjustment(&self) -> bool {
        needs_adjustment(&self.input)
    }

    /// Replace the calorie goal. Percentages are untouched.
    pub fn set_calories(&mut self, value: f64) {
        debug!(calories = value, "calorie goal changed");
        self.input.calories = value;
        self.recompute();
    }

    /// Replace one macro percentage. The other two are untouched.
    pub fn set_percentage(&mut self, field: MacroField, value: f64) {
        debug!(%field, percentage = value, "macro percentage changed");
        *self.input.percentage_mut(field) = value;
        self.recompute();
    }

    /// Replace the whole input at once.
    pub fn set_input(&mut self, input: MacroGoalInput) {
        self.input = input;
        self.recompute();
    }

    /// Rescale percentages toward a sum of 100.
    ///
    /// Returns `false` when nothing changed (zero sum, or already normalized).
    pub fn normalize(&mut self) -> bool {
        let normalized = normalize_percentages(&self.input);
        if normalized == self.input {
            return false;
        }

        info!(
            protein = normalized.protein_percentage,
            carbs = normalized.carbs_percentage,
            fats = normalized.fats_percentage,
            "percentages normalized"
        );
        self.input = normalized;
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        self.output = derive_goal_output(&self.input);
    }
}
