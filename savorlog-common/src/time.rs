//! Timestamp utilities

use chrono::{DateTime, Utc};

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Parse an RFC 3339 date-time string into a UTC timestamp
///
/// Accepts both `Z` and numeric offsets; the result is normalized to UTC.
pub fn parse_rfc3339(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_returns_valid_timestamp() {
        let timestamp = now();
        // Should be a reasonable timestamp (after year 2000)
        assert!(timestamp.timestamp() > 946_684_800); // 2000-01-01 00:00:00 UTC
    }

    #[test]
    fn test_parse_rfc3339_zulu() {
        let dt = parse_rfc3339("2025-06-01T18:00:00Z").unwrap();
        assert_eq!(dt.timestamp(), 1_748_800_800);
    }

    #[test]
    fn test_parse_rfc3339_offset_normalized_to_utc() {
        let zulu = parse_rfc3339("2025-06-01T18:00:00Z").unwrap();
        let offset = parse_rfc3339("2025-06-01T20:00:00+02:00").unwrap();
        assert_eq!(zulu, offset);
    }

    #[test]
    fn test_parse_rfc3339_rejects_garbage() {
        assert!(parse_rfc3339("not-a-date").is_none());
        assert!(parse_rfc3339("2025-06-01").is_none());
        assert!(parse_rfc3339("").is_none());
    }
}
