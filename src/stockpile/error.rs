use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockpileError {
    #[error("Inventory is full! (capacity {capacity})")]
    InventoryFull { capacity: usize },

    #[error("Item ID '{0}' already exists! Please enter a unique ID.")]
    DuplicateId(String),

    #[error("Item '{0}' not found!")]
    ItemNotFound(String),

    #[error("Category '{0}' does not exist!")]
    InvalidCategory(String),

    #[error("Invalid price {0}: must be a non-negative number")]
    InvalidPrice(f64),

    #[error("Input closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl StockpileError {
    /// Errors the menu reports and moves past, as opposed to ones that end the session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            StockpileError::InputClosed
                | StockpileError::Io(_)
                | StockpileError::Serialization(_)
                | StockpileError::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, StockpileError>;
