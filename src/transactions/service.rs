use std::sync::Arc;

use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError, util::reqwest},
    AppState,
};

use super::{
    dtos::{
        get_transactions_filter_dto::GetTransactionsFilterDto,
        seed_transaction_dto::SeedTransactionDto,
    },
    errors::TransactionsApiError,
    models::{transaction::Transaction, transactions_page::TransactionsPage},
};

pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "
        CREATE TABLE IF NOT EXISTS transactions (
            id INTEGER NOT NULL,
            title TEXT NOT NULL,
            price REAL NOT NULL,
            description TEXT NOT NULL,
            category TEXT NOT NULL,
            image TEXT NOT NULL,
            sold BOOLEAN NOT NULL,
            date_of_sale TEXT NOT NULL,
            sale_month INTEGER NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "
        CREATE INDEX IF NOT EXISTS idx_transactions_sale_month
        ON transactions (sale_month)
        ",
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn initialize(state: &Arc<AppState>) -> Result<Value, ApiError> {
    let seed = match reqwest::get_json::<Vec<SeedTransactionDto>>(&state.envy.seed_data_url).await
    {
        Ok(seed) => seed,
        Err(_) => return Err(TransactionsApiError::SeedFetchFailed.value()),
    };

    match replace_all(&seed, &state.pool).await {
        Ok(_) => Ok(json!({ "message": "Database initialized with seed data" })),
        Err(e) => Err(e),
    }
}

/// Replaces the whole collection inside one transaction so a reseed
/// never leaves stale rows behind.
pub async fn replace_all(seed: &[SeedTransactionDto], pool: &SqlitePool) -> Result<(), ApiError> {
    let sqlx_result: Result<(), sqlx::Error> = async {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM transactions").execute(&mut tx).await?;

        for dto in seed {
            let transaction = Transaction::from_seed(dto);

            sqlx::query(
                "
                INSERT INTO transactions (
                    id, title, price, description, category, image, sold, date_of_sale, sale_month
                )
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                ",
            )
            .bind(transaction.id)
            .bind(&transaction.title)
            .bind(transaction.price)
            .bind(&transaction.description)
            .bind(&transaction.category)
            .bind(&transaction.image)
            .bind(transaction.sold)
            .bind(transaction.date_of_sale)
            .bind(transaction.sale_month)
            .execute(&mut tx)
            .await?;
        }

        tx.commit().await
    }
    .await;

    match sqlx_result {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

/// Search input is matched literally: LIKE metacharacters are escaped and
/// the queries carry a matching ESCAPE clause.
fn escape_like(search: &str) -> String {
    search
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

pub async fn get_transactions(
    dto: &GetTransactionsFilterDto,
    pool: &SqlitePool,
) -> Result<TransactionsPage, ApiError> {
    let page = dto.page();
    let per_page = dto.per_page();

    let (sql, count_sql) = dto.to_sql();

    let mut query = sqlx::query_as::<_, Transaction>(&sql);
    let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);

    if let Some(search) = dto.search() {
        let escaped = escape_like(search);
        let contains = ["%", escaped.as_str(), "%"].concat();
        let prefix = [escaped.as_str(), "%"].concat();

        query = query
            .bind(contains.clone())
            .bind(contains.clone())
            .bind(prefix.clone());
        count_query = count_query.bind(contains.clone()).bind(contains).bind(prefix);
    }

    // offset math in i64: page is only bounded below, a huge page must
    // yield an empty slice, not an overflow
    query = query
        .bind(per_page as i64)
        .bind((page as i64 - 1) * per_page as i64);

    match tokio::try_join!(query.fetch_all(pool), count_query.fetch_one(pool)) {
        Ok((data, total_records)) => {
            let total_pages = (total_records + per_page as i64 - 1) / per_page as i64;

            Ok(TransactionsPage {
                page,
                per_page,
                total_pages,
                total_records,
                data,
            })
        }
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain"), "plain");
    }
}
