use dialoguer::{Confirm, Input, Select};

use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::interface::render::{format_entry, format_food};
use crate::models::{CartEntry, FoodRecord, MacroField};

/// Top-level session menu choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddFood,
    EditItem,
    RemoveItem,
    SetCalories,
    SetPercentage,
    Normalize,
    Summary,
    Quit,
}

impl MenuAction {
    fn label(&self) -> &'static str {
        match self {
            MenuAction::AddFood => "Search and add a food",
            MenuAction::EditItem => "Edit a cart item",
            MenuAction::RemoveItem => "Remove a cart item",
            MenuAction::SetCalories => "Set calorie goal",
            MenuAction::SetPercentage => "Set a macro percentage",
            MenuAction::Normalize => "Adjust percentages to sum to 100%",
            MenuAction::Summary => "Show summary",
            MenuAction::Quit => "Quit",
        }
    }
}

/// Menu entries offered for the current state.
///
/// Cart editing needs a non-empty cart; normalizing is only offered while the
/// percentages are off.
pub fn menu_actions(cart_empty: bool, needs_adjustment: bool) -> Vec<MenuAction> {
    let mut actions = vec![MenuAction::AddFood];
    if !cart_empty {
        actions.push(MenuAction::EditItem);
        actions.push(MenuAction::RemoveItem);
    }
    actions.push(MenuAction::SetCalories);
    actions.push(MenuAction::SetPercentage);
    if needs_adjustment {
        actions.push(MenuAction::Normalize);
    }
    actions.push(MenuAction::Summary);
    actions.push(MenuAction::Quit);
    actions
}

/// Prompt for the next menu action.
pub fn prompt_menu(cart_empty: bool, needs_adjustment: bool) -> Result<MenuAction> {
    let actions = menu_actions(cart_empty, needs_adjustment);
    let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(actions[selection])
}

/// Prompt for a search term, pre-filled with the current one.
pub fn prompt_search(current: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Search foods (Enter for all)")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Pick a food matching `search`, falling back to fuzzy suggestions.
///
/// Returns `None` when nothing matches or the user cancels.
pub fn prompt_food(catalog: &FoodCatalog, search: &str) -> Result<Option<FoodRecord>> {
    let mut candidates = catalog.filter(search);

    if candidates.is_empty() {
        candidates = catalog.suggest(search);
        if candidates.is_empty() {
            println!("No matching food found for '{}'", search);
            return Ok(None);
        }
        println!("No exact match for '{}'. Did you mean one of these?", search);
    }

    let mut options: Vec<String> = candidates.iter().map(|f| format_food(f)).collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt("Select a food")
        .items(&options)
        .default(0)
        .max_length(15)
        .interact()?;

    Ok(candidates.get(selection).map(|f| (*f).clone()))
}

/// Prompt for a quantity in the food's unit. Must be a positive number.
pub fn prompt_quantity(food: &FoodRecord, default: f64) -> Result<f64> {
    let quantity: f64 = Input::new()
        .with_prompt(format!("Amount of {} ({})", food.name, food.serving_size_unit))
        .default(default)
        .validate_with(|v: &f64| -> std::result::Result<(), &str> {
            if v.is_finite() && *v > 0.0 {
                Ok(())
            } else {
                Err("Amount must be a positive number")
            }
        })
        .interact_text()?;

    Ok(quantity)
}

/// Prompt for any finite number.
pub fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let value: f64 = Input::new()
        .with_prompt(prompt)
        .default(default)
        .validate_with(|v: &f64| -> std::result::Result<(), &str> {
            if v.is_finite() {
                Ok(())
            } else {
                Err("Enter a number")
            }
        })
        .interact_text()?;

    Ok(value)
}

/// Pick a cart entry. Returns its current index, or `None` on cancel.
pub fn prompt_cart_index(entries: &[CartEntry], prompt: &str) -> Result<Option<usize>> {
    let mut options: Vec<String> = entries.iter().map(format_entry).collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    Ok((selection < entries.len()).then_some(selection))
}

/// Pick one of the three macros.
pub fn prompt_macro_field() -> Result<MacroField> {
    let labels: Vec<String> = MacroField::ALL.iter().map(|f| f.to_string()).collect();

    let selection = Select::new()
        .with_prompt("Which macro?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(MacroField::ALL[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
