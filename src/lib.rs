pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod session;

pub use error::{Result, TrackerError};
pub use models::{CartEntry, FoodRecord, MacroGoalInput, MacroGoalOutput, Nutrients};
pub use session::{Session, SessionView};
