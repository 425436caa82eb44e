use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{app::models::api_error::ApiError, AppState};

use super::{
    dtos::get_month_dto::GetMonthDto,
    errors::StatsApiError,
    models::{
        category_count::CategoryCount, combined_data::CombinedData,
        monthly_statistics::MonthlyStatistics, range_count::RangeCount,
    },
    service,
};

pub async fn get_statistics(
    State(state): State<Arc<AppState>>,
    Query(dto): Query<GetMonthDto>,
) -> Result<Json<MonthlyStatistics>, ApiError> {
    let month = validate_month(&dto)?;

    match service::get_statistics(month, &state.pool).await {
        Ok(statistics) => Ok(Json(statistics)),
        Err(e) => Err(e),
    }
}

pub async fn get_bar_chart(
    State(state): State<Arc<AppState>>,
    Query(dto): Query<GetMonthDto>,
) -> Result<Json<Vec<RangeCount>>, ApiError> {
    let month = validate_month(&dto)?;

    match service::get_bar_chart(month, &state.pool).await {
        Ok(range_counts) => Ok(Json(range_counts)),
        Err(e) => Err(e),
    }
}

pub async fn get_pie_chart(
    State(state): State<Arc<AppState>>,
    Query(dto): Query<GetMonthDto>,
) -> Result<Json<Vec<CategoryCount>>, ApiError> {
    let month = validate_month(&dto)?;

    match service::get_pie_chart(month, &state.pool).await {
        Ok(categories) => Ok(Json(categories)),
        Err(e) => Err(e),
    }
}

pub async fn get_combined_data(
    State(state): State<Arc<AppState>>,
    Query(dto): Query<GetMonthDto>,
) -> Result<Json<CombinedData>, ApiError> {
    let month = validate_month(&dto)?;

    match service::get_combined_data(month, &state.pool).await {
        Ok(combined_data) => Ok(Json(combined_data)),
        Err(e) => Err(e),
    }
}

fn validate_month(dto: &GetMonthDto) -> Result<u8, ApiError> {
    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    match dto.month {
        Some(month) => Ok(month),
        None => Err(StatsApiError::MonthRequired.value()),
    }
}
