use contracts::domain::common::ConversionError;
use thiserror::Error;

/// Ошибки сервисного слоя
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} with id '{id}' not found")]
    NotFound { entity: String, id: String },

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("repository error: {0}")]
    Repository(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
