use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::app::models::api_error::ApiError;

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    match reqwest::get(url).await {
        Ok(res) => match res.json::<T>().await {
            Ok(data) => Ok(data),
            Err(e) => {
                tracing::error!(%e);
                Err(ApiError {
                    code: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "Failed to parse url response.".to_string(),
                })
            }
        },
        Err(e) => {
            tracing::error!(%e);
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to get url response.".to_string(),
            })
        }
    }
}
