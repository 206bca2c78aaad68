use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

lazy_static! {
    static ref MONTH_RE: Regex = Regex::new(r"^\d{4}-(0[1-9]|1[0-2])$").unwrap();
}

/// A validated "YYYY-MM" month token. Stored records are matched against it
/// by their date's year-month rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Month(String);

impl Month {
    pub fn parse(s: &str) -> Option<Month> {
        MONTH_RE.is_match(s).then(|| Month(s.to_string()))
    }

    /// The current calendar month (UTC).
    pub fn current() -> Month {
        let now = OffsetDateTime::now_utc();
        Month(format!("{:04}-{:02}", now.year(), u8::from(now.month())))
    }

    /// Resolve an optional query parameter: absent or malformed input falls
    /// back to the current month.
    pub fn resolve(param: Option<&str>) -> Month {
        param.and_then(Month::parse).unwrap_or_else(Month::current)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `?month=YYYY-MM` selector shared by the ride list and settlement views.
#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_tokens() {
        assert_eq!(Month::parse("2025-07").unwrap().as_str(), "2025-07");
        assert_eq!(Month::parse("1999-12").unwrap().as_str(), "1999-12");
    }

    #[test]
    fn rejects_malformed_tokens() {
        for bad in ["2025-13", "2025-0", "2025-007", "25-07", "2025/07", "", "2025-07-01"] {
            assert!(Month::parse(bad).is_none(), "{bad} should be rejected");
        }
    }

    #[test]
    fn resolve_falls_back_to_current_month() {
        let current = Month::current();
        assert_eq!(Month::resolve(None), current);
        assert_eq!(Month::resolve(Some("not-a-month")), current);
        assert_eq!(Month::resolve(Some("2025-07")).as_str(), "2025-07");
    }
}
