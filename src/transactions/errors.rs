use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum TransactionsApiError {
    SeedFetchFailed,
}

impl TransactionsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::SeedFetchFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to initialize database.".to_string(),
            },
        }
    }
}
