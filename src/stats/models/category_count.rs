use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Serialize, FromRow)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}
