use crate::engine::{preview, Derived};
use crate::models::{CartEntry, FoodRecord, MacroField, MacroGoalInput, MacroGoalOutput, Nutrients};

/// Signed delta with one decimal and an explicit `+` for positive values.
pub fn format_delta(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.1}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// `kcal | P: g | C: g | F: g` with one decimal.
pub fn format_nutrients(n: &Nutrients) -> String {
    format!(
        "{:.1} kcal | P: {:.1}g | C: {:.1}g | F: {:.1}g",
        n.calories, n.protein, n.carbs, n.fats
    )
}

/// One catalog line: name plus per-serving values.
pub fn format_food(food: &FoodRecord) -> String {
    format!(
        "{} - Per {}{} | {} kcal | P: {}g | C: {}g | F: {}g",
        food.name,
        food.serving_size,
        food.serving_size_unit,
        food.calories,
        food.protein,
        food.carbs,
        food.fats
    )
}

/// One cart line: name, amount, and scaled values.
pub fn format_entry(entry: &CartEntry) -> String {
    let scaled = match preview(&entry.food, entry.quantity) {
        Ok(n) => format_nutrients(&n),
        Err(e) => format!("<{}>", e),
    };
    format!(
        "{} - Amount: {}{} | {}",
        entry.food.name, entry.quantity, entry.food.serving_size_unit, scaled
    )
}

/// Display catalog foods.
pub fn display_food_list(foods: &[&FoodRecord], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!("  {}", format_food(food));
    }

    println!();
}

/// Display the cart with 1-based positions.
pub fn display_cart(entries: &[CartEntry]) {
    println!();
    println!("=== Your Cart ===");
    println!();

    if entries.is_empty() {
        println!("  (empty)");
    }

    for (i, entry) in entries.iter().enumerate() {
        println!("{:>3}. {}", i + 1, format_entry(entry));
    }

    println!();
}

/// Display the macro goal header and daily targets.
pub fn display_goals(input: &MacroGoalInput, output: &MacroGoalOutput, needs_adjustment: bool) {
    println!("=== Macro Goals ===");
    println!(
        "{} kcal | P: {}g | C: {}g | F: {}g",
        output.calories, output.protein, output.carbs, output.fats
    );

    for field in MacroField::ALL {
        println!(
            "  {:<8} {:>5}g ({}% of calories)",
            format!("{}:", field),
            output.grams(field),
            input.percentage(field)
        );
    }

    if needs_adjustment {
        println!(
            "  (Percentages don't sum to 100%: currently {}%)",
            input.percentage_sum()
        );
    }
    println!();
}

/// Display current totals next to the remaining allowance.
pub fn display_totals(derived: &Derived) {
    let rows = [
        ("Calories", derived.totals.calories, derived.remaining.calories, "kcal"),
        ("Protein", derived.totals.protein, derived.remaining.protein, "g"),
        ("Carbs", derived.totals.carbs, derived.remaining.carbs, "g"),
        ("Fats", derived.totals.fats, derived.remaining.fats, "g"),
    ];

    println!("--- Totals ---");
    println!("  {:<10} {:>10} {:>12}", "", "Current", "Remaining");
    for (label, current, remaining, unit) in rows {
        let marker = if remaining < 0.0 { "  over" } else { "" };
        println!(
            "  {:<10} {:>10} {:>12}{}",
            label,
            format!("{:.1}{}", current, unit),
            format!("{}{}", format_delta(remaining), unit),
            marker
        );
    }
    println!();
}

/// Display the nutrients a prospective quantity would add.
pub fn display_preview(food: &FoodRecord, quantity: f64, nutrients: &Nutrients) {
    println!(
        "  Per {}{}: {}",
        food.serving_size,
        food.serving_size_unit,
        format_nutrients(&food.per_serving())
    );
    println!(
        "  Per {}{}: {}",
        quantity,
        food.serving_size_unit,
        format_nutrients(nutrients)
    );
}

/// Display goals, cart, and totals together.
pub fn display_summary(entries: &[CartEntry], input: &MacroGoalInput, derived: &Derived) {
    println!();
    display_goals(input, &derived.goal, derived.needs_adjustment);
    display_cart(entries);
    display_totals(derived);
}
