use serde::Serialize;

use super::{
    category_count::CategoryCount, monthly_statistics::MonthlyStatistics, range_count::RangeCount,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedData {
    pub statistics: MonthlyStatistics,
    pub bar_chart: Vec<RangeCount>,
    pub pie_chart: Vec<CategoryCount>,
}
