use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RangeCount {
    pub range: String,
    pub count: i64,
}
