use axum::http::StatusCode;
use sqlx::types::BigDecimal;
use thiserror::Error;
use uuid::Uuid;

use crate::error::{ErrorMessage, HttpError};

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("Job {0} not found")]
    JobNotFound(Uuid),

    #[error("Contract {0} not found")]
    ContractNotFound(Uuid),

    #[error("Client {0} not found")]
    ClientNotFound(Uuid),

    #[error("Only the client can pay for the job")]
    NotJobClient { job_id: Uuid, actor_id: Uuid },

    #[error("You can only deposit into your own account")]
    DepositToForeignAccount { target_id: Uuid, actor_id: Uuid },

    #[error("Job already paid for")]
    AlreadyPaid(Uuid),

    #[error("Insufficient balance to pay for this job: required {required}, available {available}")]
    InsufficientFunds {
        required: BigDecimal,
        available: BigDecimal,
    },

    #[error("Invalid deposit amount")]
    InvalidAmount,

    #[error("No outstanding unpaid jobs, deposits are not allowed")]
    NothingOutstanding(Uuid),

    #[error("Deposit exceeds the allowed limit. Max allowed: {max_allowed}")]
    DepositLimitExceeded { max_allowed: BigDecimal },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl MarketError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            MarketError::JobNotFound(_)
            | MarketError::ContractNotFound(_)
            | MarketError::ClientNotFound(_) => StatusCode::NOT_FOUND,

            MarketError::NotJobClient { .. } | MarketError::DepositToForeignAccount { .. } => {
                StatusCode::FORBIDDEN
            }

            MarketError::AlreadyPaid(_)
            | MarketError::InsufficientFunds { .. }
            | MarketError::InvalidAmount
            | MarketError::NothingOutstanding(_)
            | MarketError::DepositLimitExceeded { .. } => StatusCode::BAD_REQUEST,

            MarketError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MarketError> for HttpError {
    fn from(error: MarketError) -> Self {
        match error {
            // Never leak driver details to the caller.
            MarketError::Database(ref cause) => {
                tracing::error!("database error: {}", cause);
                HttpError::server_error(ErrorMessage::ServerError.to_string())
            }
            _ => HttpError::new(error.to_string(), error.status_code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_error_taxonomy() {
        let id = Uuid::new_v4();
        assert_eq!(
            MarketError::JobNotFound(id).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            MarketError::NotJobClient {
                job_id: id,
                actor_id: id
            }
            .status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            MarketError::AlreadyPaid(id).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            MarketError::InsufficientFunds {
                required: BigDecimal::from(200),
                available: BigDecimal::from(50),
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            MarketError::DepositLimitExceeded {
                max_allowed: BigDecimal::from(100)
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            MarketError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn database_errors_collapse_to_a_generic_message() {
        let http: HttpError = MarketError::Database(sqlx::Error::RowNotFound).into();
        assert_eq!(http.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(http.message, "Internal Server Error");
    }

    #[test]
    fn limit_error_message_states_the_computed_maximum() {
        let err = MarketError::DepositLimitExceeded {
            max_allowed: BigDecimal::from(100),
        };
        assert_eq!(
            err.to_string(),
            "Deposit exceeds the allowed limit. Max allowed: 100"
        );
    }
}
