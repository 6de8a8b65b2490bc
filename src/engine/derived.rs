use serde::Serialize;

use crate::engine::cart::{remaining, sum_entries};
use crate::engine::goals::{derive_goal_output, needs_adjustment};
use crate::error::Result;
use crate::models::{CartEntry, MacroGoalInput, MacroGoalOutput, Nutrients};

/// Everything computed from the cart and the goal input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Derived {
    pub totals: Nutrients,
    pub goal: MacroGoalOutput,
    pub remaining: Nutrients,
    pub needs_adjustment: bool,
}

/// Recompute all derived values from scratch.
///
/// Called after every mutation so derived state can never lag its inputs.
pub fn derive(entries: &[CartEntry], goal_input: &MacroGoalInput) -> Result<Derived> {
    let totals = sum_entries(entries)?;
    let goal = derive_goal_output(goal_input);

    Ok(Derived {
        remaining: remaining(&totals, &goal),
        totals,
        goal,
        needs_adjustment: needs_adjustment(goal_input),
    })
}
