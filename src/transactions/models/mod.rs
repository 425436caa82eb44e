pub mod transaction;
pub mod transactions_page;
