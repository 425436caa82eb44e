use std::sync::Arc;

use axum::{
    extract::{Query, State},
    headers::{authorization::Bearer, Authorization},
    http::StatusCode,
    Json, TypedHeader,
};
use serde_json::Value;
use validator::Validate;

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    AppState,
};

use super::{
    dtos::get_transactions_filter_dto::GetTransactionsFilterDto,
    models::transactions_page::TransactionsPage, service,
};

pub async fn initialize(
    State(state): State<Arc<AppState>>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<Value>, ApiError> {
    if authorization.0.token() != state.envy.admin_token {
        return Err(DefaultApiError::PermissionDenied.value());
    }

    match service::initialize(&state).await {
        Ok(value) => Ok(Json(value)),
        Err(e) => Err(e),
    }
}

pub async fn get_transactions(
    State(state): State<Arc<AppState>>,
    Query(dto): Query<GetTransactionsFilterDto>,
) -> Result<Json<TransactionsPage>, ApiError> {
    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    match service::get_transactions(&dto, &state.pool).await {
        Ok(transactions_page) => Ok(Json(transactions_page)),
        Err(e) => Err(e),
    }
}
