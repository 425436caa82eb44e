use sqlx::{FromRow, SqlitePool};

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

use super::{
    models::{
        category_count::CategoryCount, combined_data::CombinedData,
        monthly_statistics::MonthlyStatistics, range_count::RangeCount,
    },
    PRICE_RANGES,
};

#[derive(Debug, FromRow)]
struct TotalsRow {
    total_sale_amount: f64,
    total_sold_items: i64,
    total_not_sold_items: i64,
}

pub async fn get_statistics(month: u8, pool: &SqlitePool) -> Result<MonthlyStatistics, ApiError> {
    let sqlx_result = sqlx::query_as::<_, TotalsRow>(
        "
        SELECT
        COALESCE(SUM(CASE WHEN sold THEN price ELSE 0.0 END), 0.0) AS total_sale_amount,
        COALESCE(SUM(CASE WHEN sold THEN 1 ELSE 0 END), 0) AS total_sold_items,
        COALESCE(SUM(CASE WHEN sold THEN 0 ELSE 1 END), 0) AS total_not_sold_items
        FROM transactions
        WHERE sale_month = ?
        ",
    )
    .bind(month as i64)
    .fetch_one(pool)
    .await;

    match sqlx_result {
        Ok(row) => Ok(MonthlyStatistics {
            month,
            total_sale_amount: row.total_sale_amount,
            total_sold_items: row.total_sold_items,
            total_not_sold_items: row.total_not_sold_items,
        }),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_bar_chart(month: u8, pool: &SqlitePool) -> Result<Vec<RangeCount>, ApiError> {
    let sqlx_result = sqlx::query_scalar::<_, f64>(
        "
        SELECT price FROM transactions
        WHERE sale_month = ?
        ",
    )
    .bind(month as i64)
    .fetch_all(pool)
    .await;

    match sqlx_result {
        Ok(prices) => {
            let mut counts = [0i64; PRICE_RANGES.len()];

            for price in prices {
                counts[bucket_index(price)] += 1;
            }

            Ok(PRICE_RANGES
                .iter()
                .zip(counts)
                .map(|((range, _), count)| RangeCount {
                    range: range.to_string(),
                    count,
                })
                .collect())
        }
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_pie_chart(month: u8, pool: &SqlitePool) -> Result<Vec<CategoryCount>, ApiError> {
    let sqlx_result = sqlx::query_as::<_, CategoryCount>(
        "
        SELECT category, COUNT(*) AS count FROM transactions
        WHERE sale_month = ?
        GROUP BY category
        ORDER BY category
        ",
    )
    .bind(month as i64)
    .fetch_all(pool)
    .await;

    match sqlx_result {
        Ok(categories) => Ok(categories),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

/// Fail-fast merge of the three aggregate views: the sub-queries run
/// concurrently and any failure fails the whole request.
pub async fn get_combined_data(month: u8, pool: &SqlitePool) -> Result<CombinedData, ApiError> {
    let (statistics, bar_chart, pie_chart) = tokio::try_join!(
        get_statistics(month, pool),
        get_bar_chart(month, pool),
        get_pie_chart(month, pool),
    )?;

    Ok(CombinedData {
        statistics,
        bar_chart,
        pie_chart,
    })
}

/// Buckets partition on their upper bound, so prices between the integer
/// labels (e.g. 100.5) still land in exactly one bucket.
fn bucket_index(price: f64) -> usize {
    PRICE_RANGES
        .iter()
        .position(|(_, max)| match max {
            Some(max) => price <= *max,
            None => true,
        })
        .unwrap_or(PRICE_RANGES.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn there_are_ten_buckets() {
        assert_eq!(PRICE_RANGES.len(), 10);
        assert_eq!(PRICE_RANGES[0].0, "0-100");
        assert_eq!(PRICE_RANGES[9].0, "901-above");
    }

    #[test]
    fn bucket_bounds_are_inclusive() {
        assert_eq!(bucket_index(0.0), 0);
        assert_eq!(bucket_index(100.0), 0);
        assert_eq!(bucket_index(101.0), 1);
        assert_eq!(bucket_index(200.0), 1);
        assert_eq!(bucket_index(900.0), 8);
        assert_eq!(bucket_index(901.0), 9);
    }

    #[test]
    fn fractional_prices_between_labels_are_not_dropped() {
        assert_eq!(bucket_index(100.5), 1);
        assert_eq!(bucket_index(900.99), 9);
    }

    #[test]
    fn prices_above_the_last_label_land_in_the_open_bucket() {
        assert_eq!(bucket_index(5000.0), 9);
    }
}
