use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

/// Query-string numbers are parsed best-effort; garbage is dropped rather
/// than rejected.
pub(crate) fn parse_u64(value: Option<&str>) -> Option<u64> {
    value.and_then(|v| v.trim().parse().ok())
}

pub(crate) fn parse_i64(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse().ok())
}

pub(crate) fn parse_uuid(value: Option<&str>) -> Option<uuid::Uuid> {
    value.and_then(|v| v.trim().parse().ok())
}

pub(crate) fn parse_date(value: Option<&str>) -> Option<chrono::NaiveDate> {
    value.and_then(|v| chrono::NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::{parse_date, parse_i64, parse_u64};

    #[test]
    fn malformed_query_values_are_dropped() {
        assert_eq!(parse_u64(Some("3")), Some(3));
        assert_eq!(parse_u64(Some(" 3 ")), Some(3));
        assert_eq!(parse_u64(Some("three")), None);
        assert_eq!(parse_u64(None), None);

        assert_eq!(parse_i64(Some("-100")), Some(-100));
        assert_eq!(parse_i64(Some("12.5")), None);

        assert!(parse_date(Some("2026-06-01")).is_some());
        assert!(parse_date(Some("01/06/2026")).is_none());
        assert!(parse_date(Some("")).is_none());
    }
}
