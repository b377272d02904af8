use crate::models::ToDoItem;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a deadline string into a UTC instant.
///
/// Naive date-times are read as UTC. An instant at the Unix epoch counts as
/// no deadline at all.
pub fn parse_deadline(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NAIVE_DATE_TIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
                .map(|naive| naive.and_utc())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
        .or_else(|| {
            DateTime::parse_from_rfc2822(raw)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
        })?;

    (parsed.timestamp_millis() != 0).then_some(parsed)
}

/// Short UTC label shown next to an entry, e.g. `Tue, 01 Jan 2030`.
pub fn deadline_label(raw: Option<&str>) -> String {
    raw.and_then(parse_deadline)
        .map(|dt| dt.format("%a, %d %b %Y").to_string())
        .unwrap_or_default()
}

/// Value for a date input field.
pub fn deadline_input_value(raw: Option<&str>) -> String {
    raw.and_then(parse_deadline)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

impl ToDoItem {
    /// Milliseconds since the epoch, or `None` without a usable deadline.
    pub fn deadline_timestamp(&self) -> Option<i64> {
        self.deadline
            .as_deref()
            .and_then(parse_deadline)
            .map(|dt| dt.timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_formats() {
        let midnight = parse_deadline("2030-01-01").unwrap();
        assert_eq!(midnight.to_rfc3339(), "2030-01-01T00:00:00+00:00");

        let local = parse_deadline("2030-01-01T10:30").unwrap();
        assert_eq!(local.to_rfc3339(), "2030-01-01T10:30:00+00:00");

        let offset = parse_deadline("2030-01-01T10:30:00+02:00").unwrap();
        assert_eq!(offset.to_rfc3339(), "2030-01-01T08:30:00+00:00");

        let rfc2822 = parse_deadline("Tue, 01 Jan 2030 00:00:00 GMT").unwrap();
        assert_eq!(rfc2822, midnight);
    }

    #[test]
    fn rejects_empty_garbage_and_epoch() {
        assert!(parse_deadline("").is_none());
        assert!(parse_deadline("   ").is_none());
        assert!(parse_deadline("next tuesday").is_none());
        assert!(parse_deadline("1970-01-01").is_none());
        assert!(parse_deadline("1970-01-02").is_some());
    }

    #[test]
    fn labels_follow_utc_date() {
        assert_eq!(deadline_label(Some("2030-01-01")), "Tue, 01 Jan 2030");
        assert_eq!(deadline_label(Some("oops")), "");
        assert_eq!(deadline_label(None), "");
        assert_eq!(deadline_input_value(Some("2030-01-01T22:00:00Z")), "2030-01-01");
    }

    #[test]
    fn item_timestamp_uses_deadline() {
        let item = ToDoItem::new("x").with_deadline("1970-01-01T00:00:01Z");
        assert_eq!(item.deadline_timestamp(), Some(1000));
        assert_eq!(ToDoItem::new("y").deadline_timestamp(), None);
    }
}
