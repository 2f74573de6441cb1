use crate::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: i32 },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Integrity(String),
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("Connection error: {0}")]
    Connection(#[from] diesel::ConnectionError),
    #[error("Migration error: {0}")]
    Migration(String),
    #[error("Store task failed: {0}")]
    Task(String),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        StoreError::NotFound { entity, id }
    }
}
