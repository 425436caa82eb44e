use serde::Deserialize;
use validator::Validate;

use crate::transactions::{DEFAULT_PAGE, DEFAULT_PER_PAGE};

#[derive(Debug, Deserialize, Validate)]
pub struct GetTransactionsFilterDto {
    #[validate(length(max = 512, message = "search must be 512 characters or less."))]
    pub search: Option<String>,
    #[validate(range(min = 1, message = "page must be 1 or greater."))]
    pub page: Option<u32>,
    #[serde(rename = "perPage")]
    #[validate(range(min = 1, max = 100, message = "perPage must be between 1 and 100."))]
    pub per_page: Option<u32>,
}

impl GetTransactionsFilterDto {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn per_page(&self) -> u32 {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE)
    }

    /// An empty search string means no filter, same as an absent one.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref().filter(|search| !search.is_empty())
    }

    pub fn to_sql(&self) -> (String, String) {
        let mut sql = "SELECT * FROM transactions".to_string();
        let mut count_sql = "SELECT COUNT(*) FROM transactions".to_string();

        // WHERE CLAUSE
        if self.search().is_some() {
            let clause = " WHERE title LIKE ? ESCAPE '\\' OR description LIKE ? ESCAPE '\\' OR CAST(price AS TEXT) LIKE ? ESCAPE '\\'";

            sql.push_str(clause);
            count_sql.push_str(clause);
        }

        // LIMIT/OFFSET
        sql.push_str(" LIMIT ? OFFSET ?");

        tracing::debug!(sql);

        (sql, count_sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(search: Option<&str>, page: Option<u32>, per_page: Option<u32>) -> GetTransactionsFilterDto {
        GetTransactionsFilterDto {
            search: search.map(|s| s.to_string()),
            page,
            per_page,
        }
    }

    #[test]
    fn defaults_to_first_page_of_ten() {
        let dto = dto(None, None, None);

        assert_eq!(dto.page(), 1);
        assert_eq!(dto.per_page(), 10);
        assert_eq!(dto.search(), None);
    }

    #[test]
    fn empty_search_is_no_filter() {
        let dto = dto(Some(""), None, None);

        assert_eq!(dto.search(), None);

        let (sql, count_sql) = dto.to_sql();
        assert!(!sql.contains("WHERE"));
        assert!(!count_sql.contains("WHERE"));
    }

    #[test]
    fn search_adds_filter_to_both_queries() {
        let dto = dto(Some("laptop"), None, None);

        let (sql, count_sql) = dto.to_sql();
        assert!(sql.contains("WHERE title LIKE ? ESCAPE '\\'"));
        assert!(sql.ends_with(" LIMIT ? OFFSET ?"));
        assert!(count_sql.contains("WHERE title LIKE ? ESCAPE '\\'"));
        assert!(!count_sql.contains("LIMIT"));
    }

    #[test]
    fn rejects_page_zero_and_oversized_per_page() {
        assert!(dto(None, Some(0), None).validate().is_err());
        assert!(dto(None, None, Some(0)).validate().is_err());
        assert!(dto(None, None, Some(101)).validate().is_err());
        assert!(dto(None, Some(3), Some(100)).validate().is_ok());
    }
}
