use serde::Deserialize;
use validator::Validate;

/// Month query for the aggregate endpoints. The month is a calendar month,
/// matched across all years; there is no year parameter.
#[derive(Debug, Deserialize, Validate)]
pub struct GetMonthDto {
    #[validate(range(min = 1, max = 12, message = "month must be between 1 and 12."))]
    pub month: Option<u8>,
}
