use serde::Serialize;

use super::transaction::Transaction;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsPage {
    pub page: u32,
    pub per_page: u32,
    pub total_pages: i64,
    pub total_records: i64,
    pub data: Vec<Transaction>,
}
