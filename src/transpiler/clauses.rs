//! ORDER BY / LIMIT / OFFSET helpers for the query around a WHERE fragment.

use chrono::{DateTime, TimeZone};
use crate::ast::SortOrder;

/// Page size used when the caller passes a non-positive one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// `ORDER BY a ASC, b DESC`. Empty input yields an empty string.
pub fn order_by<'a, I>(terms: I) -> String
where
    I: IntoIterator<Item = (&'a str, SortOrder)>,
{
    let clauses: Vec<String> = terms
        .into_iter()
        .map(|(field, order)| format!("{} {}", field, order))
        .collect();
    if clauses.is_empty() {
        return String::new();
    }
    format!("ORDER BY {}", clauses.join(", "))
}

/// Pairs `fields` with direction strings by position. Missing or unknown
/// directions sort ascending.
pub fn order_by_directions(fields: &[&str], directions: &[&str]) -> String {
    order_by(fields.iter().enumerate().map(|(i, field)| {
        let order = directions
            .get(i)
            .map(|d| SortOrder::from_direction(d))
            .unwrap_or_default();
        (*field, order)
    }))
}

/// `LIMIT n`, or nothing when `n <= 0`.
pub fn limit(n: i64) -> String {
    if n <= 0 {
        return String::new();
    }
    format!("LIMIT {}", n)
}

/// `OFFSET n`, or nothing when `n <= 0`.
pub fn offset(n: i64) -> String {
    if n <= 0 {
        return String::new();
    }
    format!("OFFSET {}", n)
}

/// `(LIMIT, OFFSET)` for a 1-based page.
pub fn pagination(page: i64, page_size: i64) -> (String, String) {
    let page = if page <= 0 { 1 } else { page };
    let page_size = if page_size <= 0 { DEFAULT_PAGE_SIZE } else { page_size };
    (limit(page_size), offset((page - 1).saturating_mul(page_size)))
}

/// Database-friendly `YYYY-MM-DD HH:MM:SS` in the value's own offset.
pub fn format_time_value<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    t.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone, Utc};

    #[test]
    fn test_order_by() {
        assert_eq!(
            order_by([("created_at", SortOrder::Desc), ("id", SortOrder::Asc)]),
            "ORDER BY created_at DESC, id ASC"
        );
        assert_eq!(order_by(Vec::<(&str, SortOrder)>::new()), "");
    }

    #[test]
    fn test_order_by_directions_defaults_to_asc() {
        assert_eq!(
            order_by_directions(&["name", "salary", "id"], &["desc", "sideways"]),
            "ORDER BY name DESC, salary ASC, id ASC"
        );
        assert_eq!(order_by_directions(&[], &["DESC"]), "");
    }

    #[test]
    fn test_limit_offset() {
        assert_eq!(limit(25), "LIMIT 25");
        assert_eq!(limit(0), "");
        assert_eq!(offset(-5), "");
        assert_eq!(offset(40), "OFFSET 40");
    }

    #[test]
    fn test_pagination() {
        assert_eq!(pagination(3, 20), ("LIMIT 20".to_string(), "OFFSET 40".to_string()));
        // First page has no offset.
        assert_eq!(pagination(1, 20), ("LIMIT 20".to_string(), String::new()));
        assert_eq!(pagination(0, 0), ("LIMIT 10".to_string(), String::new()));
        assert_eq!(pagination(2, -1), ("LIMIT 10".to_string(), "OFFSET 10".to_string()));
    }

    #[test]
    fn test_format_time_value() {
        let utc = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(format_time_value(&utc), "2024-03-09 07:05:01");

        let plus_three = FixedOffset::east_opt(3 * 3600).unwrap();
        assert_eq!(format_time_value(&utc.with_timezone(&plus_three)), "2024-03-09 10:05:01");
    }
}
