use std::io::Write;
use std::sync::Arc;

use macro_tracker_rs::catalog::{builtin_catalog, load_catalog};
use macro_tracker_rs::models::{MacroField, MacroGoalInput};
use macro_tracker_rs::session::Session;
use tempfile::NamedTempFile;

fn catalog_file() -> NamedTempFile {
    let json = r#"[
        {"id": "oats", "name": "Rolled Oats", "servingSize": 40, "servingSizeUnit": "g", "calories": 150, "protein": 5, "carbs": 27, "fats": 3},
        {"id": "egg", "name": "Egg", "servingSize": 1, "servingSizeUnit": "item", "calories": 78, "protein": 6.3, "carbs": 0.6, "fats": 5.3},
        {"id": "oat-milk", "name": "Oat Milk", "servingSize": 240, "servingSizeUnit": "g", "calories": 120, "protein": 3, "carbs": 16, "fats": 5}
    ]"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_search_filters_loaded_catalog() {
    let file = catalog_file();
    let catalog = load_catalog(file.path()).unwrap();

    let ids: Vec<&str> = catalog.filter("OAT").into_iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["oats", "oat-milk"]);

    for food in catalog.filter("oat") {
        assert!(food.name.to_lowercase().contains("oat"));
    }
    assert!(catalog.filter("salmon").is_empty());
}

#[test]
fn test_full_session_flow() {
    let file = catalog_file();
    let catalog = Arc::new(load_catalog(file.path()).unwrap());
    let mut session = Session::new(catalog, MacroGoalInput::new(2000.0, 30.0, 40.0, 30.0));

    session.add_by_id("oats", 80.0).unwrap();
    session.add_by_id("egg", 2.0).unwrap();
    session.add_by_id("oat-milk", 120.0).unwrap();

    let view = session.snapshot().unwrap();
    assert_eq!(view.entries.len(), 3);
    // 300 + 156 + 60
    assert!((view.derived.totals.calories - 516.0).abs() < 0.001);
    assert!((view.derived.remaining.calories - 1484.0).abs() < 0.001);
    assert_eq!(view.derived.goal.fats, 67.0);

    let egg = session.entry_nutrients(1).unwrap();
    assert!((egg.protein - 12.6).abs() < 0.001);

    // Drop the eggs; the oat milk moves to index 1.
    let left = session.remove(1).unwrap();
    assert_eq!(left.len(), 2);
    session.update(1, 240.0).unwrap();

    let view = session.snapshot().unwrap();
    assert_eq!(view.entries[1].food.id, "oat-milk");
    assert!((view.derived.totals.calories - 420.0).abs() < 0.001);
    assert!((view.derived.totals.protein - 13.0).abs() < 0.001);
}

#[test]
fn test_goal_edits_flow_into_remaining() {
    let catalog = Arc::new(builtin_catalog().unwrap());
    let mut session = Session::new(catalog, MacroGoalInput::default());
    session.add_by_id("chicken-breast", 500.0).unwrap();

    // 155g protein eaten against a 150g target
    let view = session.snapshot().unwrap();
    assert!((view.derived.remaining.protein + 5.0).abs() < 0.001);

    session.set_percentage(MacroField::Protein, 40.0);
    let view = session.snapshot().unwrap();
    assert!(view.derived.needs_adjustment);
    assert!((view.derived.remaining.protein - 45.0).abs() < 0.001);

    assert!(session.normalize_goals());
    let view = session.snapshot().unwrap();
    // 40/40/30 -> 36/36/27
    assert_eq!(view.goal_input.protein_percentage, 36.0);
    assert_eq!(view.goal_input.fats_percentage, 27.0);
    assert!(view.derived.needs_adjustment);
}

#[test]
fn test_update_out_of_range_keeps_state() {
    let catalog = Arc::new(builtin_catalog().unwrap());
    let mut session = Session::new(catalog, MacroGoalInput::default());
    session.add_by_id("apple", 1.0).unwrap();

    assert!(session.update(5, 2.0).is_err());
    assert!(session.remove(5).is_err());

    let view = session.snapshot().unwrap();
    assert_eq!(view.entries.len(), 1);
    assert_eq!(view.entries[0].quantity, 1.0);
}
