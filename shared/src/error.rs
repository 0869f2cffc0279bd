use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("transaction error")]
    TransactionError(#[source] sqlx::Error),
    #[error("database operation error")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("{0}")]
    NoRowsAffectedError(String),
    #[error("key value store error")]
    KeyValueStoreError(#[from] redis::RedisError),
    #[error("password hash error")]
    BcryptError(String),
    #[error("{0}")]
    ConvertToUuidError(#[from] uuid::Error),
    #[error("authentication required")]
    UnauthenticatedError,
    #[error("operation not permitted")]
    UnauthorizedError,
    #[error("{0}")]
    ForbiddenOperation(String),
    #[error("{0}")]
    ExternalServiceError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            AppError::UnprocessableEntity(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::ForbiddenOperation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) | AppError::ConvertToUuidError(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedError => StatusCode::FORBIDDEN,
            AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::KeyValueStoreError(_)
            | AppError::BcryptError(_)
            | AppError::ExternalServiceError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!(
            error.cause_chain = ?self,
            error.message = %self,
            "error occurred while handling request"
        );

        status_code.into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
