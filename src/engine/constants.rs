/// Energy content of one gram of protein (kcal).
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Energy content of one gram of carbohydrate (kcal).
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// Energy content of one gram of fat (kcal).
pub const KCAL_PER_GRAM_FATS: f64 = 9.0;

/// Target sum of the three macro percentages.
pub const PERCENTAGE_TOTAL: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Starting goals for a new session
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_CALORIE_GOAL: f64 = 2000.0;
pub const DEFAULT_PROTEIN_PERCENTAGE: f64 = 30.0;
pub const DEFAULT_CARBS_PERCENTAGE: f64 = 40.0;
pub const DEFAULT_FATS_PERCENTAGE: f64 = 30.0;

// ─────────────────────────────────────────────────────────────────────────────
// Catalog search
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum Jaro-Winkler similarity for a fuzzy name suggestion.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum number of fuzzy suggestions offered.
pub const MAX_SUGGESTIONS: usize = 5;
