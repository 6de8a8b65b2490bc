use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Invalid serving size {serving_size} for food '{id}' (must be > 0)")]
    InvalidServingSize { id: String, serving_size: f64 },

    #[error("Duplicate food id in catalog: {0}")]
    DuplicateFoodId(String),

    #[error("Cart index {index} out of range (cart has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
