mod builtin;
mod loader;
mod lookup;

pub use builtin::{builtin_catalog, builtin_foods};
pub use loader::{load_catalog, load_foods};
pub use lookup::{filter_foods, matches_search, FoodCatalog};
