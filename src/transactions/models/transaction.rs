use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::transactions::dtos::seed_transaction_dto::SeedTransactionDto;

#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub sold: bool,
    pub date_of_sale: DateTime<Utc>,
    // derived at insert, month filters key off it
    #[serde(skip_serializing)]
    pub sale_month: i64,
}

impl Transaction {
    pub fn from_seed(dto: &SeedTransactionDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title.to_string(),
            price: dto.price,
            description: dto.description.to_string(),
            category: dto.category.to_string(),
            image: dto.image.to_string(),
            sold: dto.sold,
            date_of_sale: dto.date_of_sale,
            sale_month: dto.date_of_sale.month() as i64,
        }
    }
}
