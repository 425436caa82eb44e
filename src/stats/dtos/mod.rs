pub mod get_month_dto;
