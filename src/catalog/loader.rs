use std::fs;
use std::path::Path;

use tracing::info;

use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::models::FoodRecord;

/// Load food records from a JSON array or, for `.csv` files, a CSV table
/// with a header row.
///
/// Records are returned in file order and are not validated here.
pub fn load_foods<P: AsRef<Path>>(path: P) -> Result<Vec<FoodRecord>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        let mut reader = csv::Reader::from_path(path)?;
        let foods = reader
            .deserialize()
            .collect::<std::result::Result<Vec<FoodRecord>, csv::Error>>()?;
        Ok(foods)
    } else {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Load and validate a catalog file.
///
/// Any record with a non-positive serving size fails the whole load, so the
/// scaling code never sees one.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let path = path.as_ref();
    let catalog = FoodCatalog::new(load_foods(path)?)?;
    info!(path = %path.display(), count = catalog.len(), "catalog loaded");
    Ok(catalog)
}
