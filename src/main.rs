use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use macro_tracker_rs::catalog::{builtin_catalog, load_catalog, FoodCatalog};
use macro_tracker_rs::cli::{Cli, Command};
use macro_tracker_rs::config::{resolve_config, AppConfig};
use macro_tracker_rs::engine::{
    derive_goal_output, needs_adjustment, normalize_percentages, preview,
};
use macro_tracker_rs::error::Result;
use macro_tracker_rs::interface::{
    display_food_list, display_goals, display_preview, display_summary, prompt_cart_index,
    prompt_food, prompt_macro_field, prompt_menu, prompt_number, prompt_quantity, prompt_search,
    prompt_yes_no, MenuAction,
};
use macro_tracker_rs::models::MacroGoalInput;
use macro_tracker_rs::session::Session;

const DEFAULT_LOG_DIRECTIVE: &str = "macro_tracker_rs=warn";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so tracing output never interleaves with rendered tables.
///
/// `RUST_LOG` wins over the config file's `log_level`.
fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            EnvFilter::try_new(config.log_level.as_deref().unwrap_or(DEFAULT_LOG_DIRECTIVE))
        })
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref())?;
    init_logging(&config);

    let catalog_path = cli.catalog.as_deref().or(config.catalog.as_deref());
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Session => cmd_session(open_catalog(catalog_path)?, config.goals),
        Command::Search { term } => cmd_search(&open_catalog(catalog_path)?, &term),
        Command::Goals {
            calories,
            protein,
            carbs,
            fats,
            normalize,
        } => {
            let base = config.goals;
            let input = MacroGoalInput::new(
                calories.unwrap_or(base.calories),
                protein.unwrap_or(base.protein_percentage),
                carbs.unwrap_or(base.carbs_percentage),
                fats.unwrap_or(base.fats_percentage),
            );
            cmd_goals(input, normalize)
        }
        Command::Validate => cmd_validate(catalog_path),
    }
}

/// Load the configured catalog, or the built-in one.
fn open_catalog(path: Option<&Path>) -> Result<FoodCatalog> {
    match path {
        Some(path) => load_catalog(path),
        None => builtin_catalog(),
    }
}

/// Interactive tracking session.
fn cmd_session(catalog: FoodCatalog, goals: MacroGoalInput) -> Result<()> {
    println!("Loaded {} foods", catalog.len());

    let mut session = Session::new(Arc::new(catalog), goals);

    {
        let view = session.snapshot()?;
        display_summary(view.entries, view.goal_input, &view.derived);
    }

    loop {
        let (cart_empty, adjust) = {
            let view = session.snapshot()?;
            (view.entries.is_empty(), view.derived.needs_adjustment)
        };

        match prompt_menu(cart_empty, adjust)? {
            MenuAction::AddFood => add_food(&mut session)?,
            MenuAction::EditItem => edit_item(&mut session)?,
            MenuAction::RemoveItem => remove_item(&mut session)?,
            MenuAction::SetCalories => {
                let current = session.goal_input().calories;
                let value = prompt_number("Calories (kcal)", current)?;
                session.set_calories(value);
            }
            MenuAction::SetPercentage => {
                let field = prompt_macro_field()?;
                let current = session.goal_input().percentage(field);
                let value = prompt_number(&format!("{} (%)", field), current)?;
                session.set_percentage(field, value);
            }
            MenuAction::Normalize => {
                if !session.normalize_goals() {
                    println!("Percentages left unchanged.");
                }
            }
            MenuAction::Summary => {}
            MenuAction::Quit => break,
        }

        let view = session.snapshot()?;
        display_summary(view.entries, view.goal_input, &view.derived);
    }

    Ok(())
}

fn add_food(session: &mut Session) -> Result<()> {
    let search = prompt_search(session.search())?;
    session.set_search(search);

    let Some(food) = prompt_food(session.catalog(), session.search())? else {
        return Ok(());
    };

    let quantity = prompt_quantity(&food, food.serving_size)?;
    display_preview(&food, quantity, &preview(&food, quantity)?);

    if prompt_yes_no("Add to cart?", true)? {
        session.add(food, quantity);
    }
    Ok(())
}

fn edit_item(session: &mut Session) -> Result<()> {
    let Some(index) = prompt_cart_index(session.entries(), "Edit which item?")? else {
        return Ok(());
    };

    let entry = session.entries()[index].clone();
    let quantity = prompt_quantity(&entry.food, entry.quantity)?;
    display_preview(&entry.food, quantity, &preview(&entry.food, quantity)?);

    if prompt_yes_no("Update?", true)? {
        session.update(index, quantity)?;
    }
    Ok(())
}

fn remove_item(session: &mut Session) -> Result<()> {
    let Some(index) = prompt_cart_index(session.entries(), "Remove which item?")? else {
        return Ok(());
    };

    let name = session.entries()[index].name().to_string();
    if prompt_yes_no(
        &format!("Are you sure you want to remove {} from your cart?", name),
        false,
    )? {
        let remaining = session.remove(index)?;
        println!("Removed {}. {} items left.", name, remaining.len());
    }
    Ok(())
}

/// Print catalog foods matching a search term.
fn cmd_search(catalog: &FoodCatalog, term: &str) -> Result<()> {
    let foods = catalog.filter(term);
    let title = if term.is_empty() {
        "Food Catalog".to_string()
    } else {
        format!("Foods matching '{}'", term)
    };
    display_food_list(&foods, &title);

    if foods.is_empty() && !term.is_empty() {
        let suggestions = catalog.suggest(term);
        if !suggestions.is_empty() {
            display_food_list(&suggestions, "Did you mean");
        }
    }
    Ok(())
}

/// Print gram targets for a goal input.
fn cmd_goals(input: MacroGoalInput, normalize: bool) -> Result<()> {
    let input = if normalize {
        normalize_percentages(&input)
    } else {
        input
    };

    let output = derive_goal_output(&input);
    display_goals(&input, &output, needs_adjustment(&input));
    Ok(())
}

/// Load the catalog and report its size; load errors surface as the exit status.
fn cmd_validate(path: Option<&Path>) -> Result<()> {
    let catalog = open_catalog(path)?;
    let source = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in catalog".to_string());
    println!("{}: {} foods, all valid.", source, catalog.len());
    Ok(())
}
