use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::catalog::FoodCatalog;
use crate::engine::{derive, Cart, Derived, MacroGoalEngine};
use crate::error::{Result, TrackerError};
use crate::models::{CartEntry, FoodRecord, MacroField, MacroGoalInput, Nutrients};

/// Everything the presentation layer needs after a state change.
#[derive(Debug, Serialize)]
pub struct SessionView<'a> {
    pub search: &'a str,
    pub filtered: Vec<&'a FoodRecord>,
    pub entries: &'a [CartEntry],
    pub goal_input: &'a MacroGoalInput,
    pub derived: Derived,
}

/// One user's tracking session: search term, cart, and goals.
///
/// The catalog is shared read-only between sessions; everything else is
/// owned here and never shared.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Arc<FoodCatalog>,
    search: String,
    cart: Cart,
    goals: MacroGoalEngine,
}

impl Session {
    pub fn new(catalog: Arc<FoodCatalog>, goal_input: MacroGoalInput) -> Self {
        Self {
            catalog,
            search: String::new(),
            cart: Cart::new(),
            goals: MacroGoalEngine::new(goal_input),
        }
    }

    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        debug!(search = %self.search, "search changed");
    }

    /// Catalog foods matching the current search.
    pub fn filtered(&self) -> Vec<&FoodRecord> {
        self.catalog.filter(&self.search)
    }

    pub fn entries(&self) -> &[CartEntry] {
        self.cart.entries()
    }

    pub fn goal_input(&self) -> &MacroGoalInput {
        self.goals.input()
    }

    pub fn add(&mut self, food: FoodRecord, quantity: f64) {
        self.cart.add_item(food, quantity);
    }

    /// Add a catalog food by id.
    pub fn add_by_id(&mut self, id: &str, quantity: f64) -> Result<()> {
        let food = self
            .catalog
            .get(id)
            .cloned()
            .ok_or_else(|| TrackerError::FoodNotFound(id.to_string()))?;
        self.cart.add_item(food, quantity);
        Ok(())
    }

    pub fn update(&mut self, index: usize, quantity: f64) -> Result<()> {
        self.cart.update_item(index, quantity)
    }

    /// Remove the cart entry at `index` and return the re-indexed entries.
    pub fn remove(&mut self, index: usize) -> Result<&[CartEntry]> {
        self.cart.remove_item(index)
    }

    /// Scaled nutrients for the cart entry at `index`.
    pub fn entry_nutrients(&self, index: usize) -> Result<Nutrients> {
        self.cart.scaled_at(index)
    }

    pub fn set_calories(&mut self, value: f64) {
        self.goals.set_calories(value);
    }

    pub fn set_percentage(&mut self, field: MacroField, value: f64) {
        self.goals.set_percentage(field, value);
    }

    /// Rescale the goal percentages toward 100. Returns whether they changed.
    pub fn normalize_goals(&mut self) -> bool {
        self.goals.normalize()
    }

    /// Recompute every derived value from the current state.
    pub fn snapshot(&self) -> Result<SessionView<'_>> {
        let derived = derive(self.cart.entries(), self.goals.input())?;

        Ok(SessionView {
            search: &self.search,
            filtered: self.filtered(),
            entries: self.cart.entries(),
            goal_input: self.goals.input(),
            derived,
        })
    }
}
