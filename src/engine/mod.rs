pub mod cart;
pub mod constants;
pub mod derived;
pub mod goals;

pub use cart::{preview, remaining, scaled_nutrients, sum_entries, Cart};
pub use constants::*;
pub use derived::{derive, Derived};
pub use goals::{
    derive_goal_output, kcal_per_gram, macro_grams, needs_adjustment, normalize_percentages,
    round_grams, MacroGoalEngine,
};
