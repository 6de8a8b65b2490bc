mod cart;
mod food;
mod goals;
mod nutrients;

pub use cart::CartEntry;
pub use food::{FoodRecord, ServingSizeUnit};
pub use goals::{MacroField, MacroGoalInput, MacroGoalOutput};
pub use nutrients::Nutrients;
