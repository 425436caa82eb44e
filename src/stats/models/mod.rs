pub mod category_count;
pub mod combined_data;
pub mod monthly_statistics;
pub mod range_count;
