use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum StatsApiError {
    MonthRequired,
}

impl StatsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::MonthRequired => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Month is required.".to_string(),
            },
        }
    }
}
