#[macro_use]
extern crate assert_float_eq;

use macro_tracker_rs::engine::{remaining, scaled_nutrients, Cart};
use macro_tracker_rs::error::TrackerError;
use macro_tracker_rs::models::{CartEntry, FoodRecord, MacroGoalOutput, Nutrients, ServingSizeUnit};

fn make_food(
    id: &str,
    size: f64,
    unit: ServingSizeUnit,
    cal: f64,
    p: f64,
    c: f64,
    f: f64,
) -> FoodRecord {
    FoodRecord {
        id: id.to_string(),
        name: id.to_string(),
        serving_size: size,
        serving_size_unit: unit,
        calories: cal,
        protein: p,
        carbs: c,
        fats: f,
    }
}

fn abc_cart() -> Cart {
    let mut cart = Cart::new();
    cart.add_item(make_food("A", 100.0, ServingSizeUnit::Grams, 100.0, 1.0, 1.0, 1.0), 100.0);
    cart.add_item(make_food("B", 1.0, ServingSizeUnit::Item, 50.0, 2.0, 2.0, 2.0), 2.0);
    cart.add_item(make_food("C", 30.0, ServingSizeUnit::Grams, 90.0, 3.0, 3.0, 3.0), 15.0);
    cart
}

#[test]
fn test_half_serving_scenario() {
    let entry = CartEntry::new(
        make_food("X", 100.0, ServingSizeUnit::Grams, 200.0, 10.0, 20.0, 5.0),
        50.0,
    );
    let scaled = scaled_nutrients(&entry).unwrap();

    assert_float_absolute_eq!(scaled.calories, 100.0, 1e-9);
    assert_float_absolute_eq!(scaled.protein, 5.0, 1e-9);
    assert_float_absolute_eq!(scaled.carbs, 10.0, 1e-9);
    assert_float_absolute_eq!(scaled.fats, 2.5, 1e-9);
}

#[test]
fn test_item_unit_scaling() {
    let egg = make_food("Egg", 1.0, ServingSizeUnit::Item, 78.0, 6.3, 0.6, 5.3);
    let entry = CartEntry::new(egg, 3.0);
    let scaled = scaled_nutrients(&entry).unwrap();
    assert_float_absolute_eq!(scaled.calories, 234.0, 1e-9);
    assert_float_absolute_eq!(scaled.protein, 18.9, 1e-9);
}

#[test]
fn test_totals_sum_entries() {
    let totals = abc_cart().totals().unwrap();
    // 100 + 100 + 45
    assert_float_absolute_eq!(totals.calories, 245.0, 1e-9);
    assert_float_absolute_eq!(totals.protein, 6.5, 1e-9);
}

#[test]
fn test_totals_invariant_under_reordering() {
    let forward = abc_cart();
    let mut reversed = Cart::new();
    for entry in forward.entries().iter().rev() {
        reversed.add_item(entry.food.clone(), entry.quantity);
    }

    let a = forward.totals().unwrap();
    let b = reversed.totals().unwrap();
    assert_float_absolute_eq!(a.calories, b.calories, 1e-9);
    assert_float_absolute_eq!(a.protein, b.protein, 1e-9);
    assert_float_absolute_eq!(a.carbs, b.carbs, 1e-9);
    assert_float_absolute_eq!(a.fats, b.fats, 1e-9);
}

#[test]
fn test_remove_reindexes() {
    let mut cart = abc_cart();

    let names: Vec<&str> = cart
        .remove_item(1)
        .unwrap()
        .iter()
        .map(|e| e.name())
        .collect();
    assert_eq!(names, vec!["A", "C"]);

    cart.update_item(1, 60.0).unwrap();
    assert_eq!(cart.get(1).unwrap().food.id, "C");
    assert_eq!(cart.get(1).unwrap().quantity, 60.0);
    assert_eq!(cart.get(0).unwrap().quantity, 100.0);
}

#[test]
fn test_stale_index_rejected_after_removal() {
    let mut cart = abc_cart();
    cart.remove_item(0).unwrap();

    let before: Vec<CartEntry> = cart.entries().to_vec();
    let err = cart.update_item(2, 1.0).unwrap_err();
    assert!(matches!(err, TrackerError::IndexOutOfRange { index: 2, len: 2 }));
    assert!(matches!(cart.remove_item(2), Err(TrackerError::IndexOutOfRange { .. })));
    assert_eq!(cart.entries(), before.as_slice());
}

#[test]
fn test_zero_serving_size_surfaces_error() {
    let mut cart = abc_cart();
    let broken = make_food("Broken", 0.0, ServingSizeUnit::Grams, 10.0, 0.0, 0.0, 0.0);
    cart.add_item(broken, 5.0);

    match cart.totals() {
        Err(TrackerError::InvalidServingSize { id, serving_size }) => {
            assert_eq!(id, "Broken");
            assert_eq!(serving_size, 0.0);
        }
        other => panic!("expected InvalidServingSize, got {:?}", other),
    }
}

#[test]
fn test_remaining_scenarios() {
    let goal = MacroGoalOutput {
        calories: 2000.0,
        protein: 150.0,
        carbs: 200.0,
        fats: 67.0,
    };

    let under = remaining(&Nutrients::new(100.0, 10.0, 20.0, 5.0), &goal);
    assert_float_absolute_eq!(under.calories, 1900.0, 1e-9);
    assert_float_absolute_eq!(under.fats, 62.0, 1e-9);

    let over = remaining(&Nutrients::new(2100.0, 160.0, 20.0, 5.0), &goal);
    assert_float_absolute_eq!(over.calories, -100.0, 1e-9);
    assert_float_absolute_eq!(over.protein, -10.0, 1e-9);
    assert!(over.any_negative());
}
