use std::collections::HashMap;

use strsim::jaro_winkler;
use tracing::debug;

use crate::engine::constants::{FUZZY_MATCH_THRESHOLD, MAX_SUGGESTIONS};
use crate::error::{Result, TrackerError};
use crate::models::FoodRecord;

/// Case-insensitive substring match. An empty search matches everything.
pub fn matches_search(name: &str, search: &str) -> bool {
    search.is_empty() || name.to_lowercase().contains(&search.to_lowercase())
}

/// Foods whose name contains `search`, in their original order.
pub fn filter_foods<'a>(foods: &'a [FoodRecord], search: &str) -> Vec<&'a FoodRecord> {
    foods
        .iter()
        .filter(|f| matches_search(&f.name, search))
        .collect()
}

/// Read-only, ordered food catalog.
///
/// Every record has passed [`FoodRecord::validate`] and ids are unique.
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    foods: Vec<FoodRecord>,
    /// Position in `foods` keyed by id.
    by_id: HashMap<String, usize>,
}

impl FoodCatalog {
    /// Build a catalog, rejecting invalid records and duplicate ids.
    pub fn new(foods: Vec<FoodRecord>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(foods.len());
        for (i, food) in foods.iter().enumerate() {
            food.validate()?;
            if by_id.insert(food.id.clone(), i).is_some() {
                return Err(TrackerError::DuplicateFoodId(food.id.clone()));
            }
        }

        debug!(count = foods.len(), "catalog built");
        Ok(Self { foods, by_id })
    }

    /// Get a food by id.
    pub fn get(&self, id: &str) -> Option<&FoodRecord> {
        self.by_id.get(id).map(|&i| &self.foods[i])
    }

    /// Get a food by exact name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&FoodRecord> {
        let name = name.to_lowercase();
        self.foods.iter().find(|f| f.name.to_lowercase() == name)
    }

    /// Foods whose name contains `search`, case-insensitively, in catalog order.
    pub fn filter(&self, search: &str) -> Vec<&FoodRecord> {
        filter_foods(&self.foods, search)
    }

    /// Closest names by Jaro-Winkler similarity, best first.
    pub fn suggest(&self, name: &str) -> Vec<&FoodRecord> {
        let name = name.to_lowercase();
        let mut candidates: Vec<(&FoodRecord, f64)> = self
            .foods
            .iter()
            .map(|f| (f, jaro_winkler(&f.name.to_lowercase(), &name)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        candidates
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(f, _)| f)
            .collect()
    }

    pub fn foods(&self) -> &[FoodRecord] {
        &self.foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServingSizeUnit;

    fn food(id: &str, name: &str) -> FoodRecord {
        FoodRecord {
            id: id.to_string(),
            name: name.to_string(),
            serving_size: 100.0,
            serving_size_unit: ServingSizeUnit::Grams,
            calories: 100.0,
            protein: 1.0,
            carbs: 1.0,
            fats: 1.0,
        }
    }

    fn sample_catalog() -> FoodCatalog {
        FoodCatalog::new(vec![
            food("1", "Chicken Breast"),
            food("2", "Brown Rice"),
            food("3", "Chickpeas"),
            food("4", "Broccoli"),
        ])
        .unwrap()
    }

    #[test]
    fn test_filter_case_insensitive_preserves_order() {
        let catalog = sample_catalog();
        let names: Vec<&str> = catalog
            .filter("CHICK")
            .into_iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["Chicken Breast", "Chickpeas"]);
    }

    #[test]
    fn test_filter_empty_returns_all() {
        assert_eq!(sample_catalog().filter("").len(), 4);
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        assert!(sample_catalog().filter("salmon").is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = FoodCatalog::new(vec![food("1", "A"), food("1", "B")]);
        assert!(matches!(result, Err(TrackerError::DuplicateFoodId(id)) if id == "1"));
    }

    #[test]
    fn test_zero_serving_size_rejected_at_load() {
        let mut bad = food("9", "Bad");
        bad.serving_size = 0.0;
        assert!(matches!(
            FoodCatalog::new(vec![bad]),
            Err(TrackerError::InvalidServingSize { .. })
        ));
    }

    #[test]
    fn test_get_and_find_by_name() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get("2").unwrap().name, "Brown Rice");
        assert!(catalog.get("99").is_none());
        assert_eq!(catalog.find_by_name("broccoli").unwrap().id, "4");
    }

    #[test]
    fn test_suggest_fuzzy() {
        let catalog = sample_catalog();
        let suggestions = catalog.suggest("brocoli");
        assert_eq!(suggestions[0].name, "Broccoli");
    }
}
