pub mod get_transactions_filter_dto;
pub mod seed_transaction_dto;
