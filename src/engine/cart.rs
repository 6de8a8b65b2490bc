use tracing::{debug, info};

use crate::error::{Result, TrackerError};
use crate::models::{CartEntry, FoodRecord, MacroGoalOutput, Nutrients};

/// Nutrients for `quantity` of `food`: `value * quantity / serving_size`.
///
/// A non-positive serving size is a catalog data error and is reported, not
/// papered over with zeros.
pub fn preview(food: &FoodRecord, quantity: f64) -> Result<Nutrients> {
    food.check_serving_size()?;
    Ok(food.per_serving().scale(quantity / food.serving_size))
}

/// Scaled nutrients for one cart entry.
#[inline]
pub fn scaled_nutrients(entry: &CartEntry) -> Result<Nutrients> {
    preview(&entry.food, entry.quantity)
}

/// Sum of scaled nutrients over `entries`, in order.
pub fn sum_entries(entries: &[CartEntry]) -> Result<Nutrients> {
    let mut total = Nutrients::default();
    for entry in entries {
        total += scaled_nutrients(entry)?;
    }
    Ok(total)
}

/// Signed per-nutrient `goal - total`. Negative means over budget.
#[inline]
pub fn remaining(totals: &Nutrients, goal: &MacroGoalOutput) -> Nutrients {
    goal.as_nutrients() - *totals
}

/// Ordered, index-addressed list of cart entries.
///
/// Indices are only valid until the next removal; callers re-derive them from
/// [`Cart::entries`] (or the slice returned by [`Cart::remove_item`]).
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CartEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a new entry. The same food may appear any number of times.
    pub fn add_item(&mut self, food: FoodRecord, quantity: f64) {
        info!(food = %food.id, quantity, "added to cart");
        self.entries.push(CartEntry::new(food, quantity));
    }

    /// Replace the quantity of the entry at `index`.
    pub fn update_item(&mut self, index: usize, quantity: f64) -> Result<()> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(TrackerError::IndexOutOfRange { index, len })?;

        debug!(
            food = %entry.food.id,
            from = entry.quantity,
            to = quantity,
            "cart quantity updated"
        );
        entry.quantity = quantity;
        Ok(())
    }

    /// Remove the entry at `index`, shifting later entries down by one.
    ///
    /// Returns the new entry list.
    pub fn remove_item(&mut self, index: usize) -> Result<&[CartEntry]> {
        if index >= self.entries.len() {
            return Err(TrackerError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }

        let removed = self.entries.remove(index);
        info!(food = %removed.food.id, index, "removed from cart");
        Ok(&self.entries)
    }

    /// Scaled nutrients for the entry at `index`.
    pub fn scaled_at(&self, index: usize) -> Result<Nutrients> {
        let entry = self.entries.get(index).ok_or(TrackerError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })?;
        scaled_nutrients(entry)
    }

    /// Running totals over every entry, summed in insertion order.
    pub fn totals(&self) -> Result<Nutrients> {
        sum_entries(&self.entries)
    }
}
