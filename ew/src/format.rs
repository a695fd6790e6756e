//! Pure display helpers shared by commands and the dashboard.

use chrono::{DateTime, Utc};

/// Rough bucket a backend transaction status falls into, for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Pending,
    Failed,
}

/// Classify a backend status string by substring, case-insensitively.
pub fn status_kind(status: &str) -> StatusKind {
    let status = status.to_ascii_lowercase();
    if status.contains("success") || status.contains("confirmed") {
        StatusKind::Success
    } else if status.contains("pending") || status.contains("queue") {
        StatusKind::Pending
    } else {
        StatusKind::Failed
    }
}

/// Shorten a hex address to `0x1234...abcd`.
///
/// Counts characters, not bytes: the input comes straight from the user, so
/// it is not guaranteed to be ASCII hex.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Human-friendly relative age ("just now", "3m ago", "2h ago", "4d ago"),
/// falling back to the date beyond a week.
pub fn relative_age(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    let mins = elapsed.num_minutes();
    if mins < 1 {
        return "just now".to_string();
    }
    if mins < 60 {
        return format!("{mins}m ago");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{hours}h ago");
    }
    let days = elapsed.num_days();
    if days < 7 {
        return format!("{days}d ago");
    }
    at.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortens_long_addresses_only() {
        assert_eq!(
            short_address("0x1234567890abcdef1234567890abcdef12345678"),
            "0x1234...5678"
        );
        assert_eq!(short_address("0xabc"), "0xabc");
    }

    #[test]
    fn shortening_tolerates_non_ascii_input() {
        // User-supplied, not validated hex; must not panic mid-codepoint.
        assert_eq!(short_address("0xдеадбифкафе12345"), "0xдеад...2345");
        assert_eq!(short_address("ééééééééééé"), "éééééé...éééé");
    }

    #[test]
    fn classifies_statuses_by_substring() {
        assert_eq!(status_kind("SUCCESS"), StatusKind::Success);
        assert_eq!(status_kind("Confirmed"), StatusKind::Success);
        assert_eq!(status_kind("PENDING"), StatusKind::Pending);
        assert_eq!(status_kind("in_queue"), StatusKind::Pending);
        assert_eq!(status_kind("REVERTED"), StatusKind::Failed);
    }

    #[test]
    fn relative_age_buckets() {
        let now: DateTime<Utc> = "2024-05-10T12:00:00Z".parse().unwrap();
        let at = |s: &str| s.parse::<DateTime<Utc>>().unwrap();

        assert_eq!(relative_age(at("2024-05-10T11:59:40Z"), now), "just now");
        assert_eq!(relative_age(at("2024-05-10T11:57:00Z"), now), "3m ago");
        assert_eq!(relative_age(at("2024-05-10T09:00:00Z"), now), "3h ago");
        assert_eq!(relative_age(at("2024-05-06T12:00:00Z"), now), "4d ago");
        assert_eq!(relative_age(at("2024-04-01T12:00:00Z"), now), "2024-04-01");
    }
}
