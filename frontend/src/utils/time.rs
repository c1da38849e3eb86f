use chrono::{DateTime, Datelike, Utc};

/// Compact age of a post: "just now", "5m", "3h", "2d", then a calendar date.
pub fn format_relative(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);
    if elapsed.num_minutes() < 1 {
        return "just now".to_string();
    }
    if elapsed.num_hours() < 1 {
        return format!("{}m", elapsed.num_minutes());
    }
    if elapsed.num_days() < 1 {
        return format!("{}h", elapsed.num_hours());
    }
    if elapsed.num_days() < 7 {
        return format!("{}d", elapsed.num_days());
    }
    if created_at.year() == now.year() {
        created_at.format("%b %-d").to_string()
    } else {
        created_at.format("%b %-d, %Y").to_string()
    }
}

pub fn format_relative_now(created_at: DateTime<Utc>) -> String {
    format_relative(created_at, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn recent_posts_use_short_units() {
        assert_eq!(format_relative(now() - Duration::seconds(20), now()), "just now");
        assert_eq!(format_relative(now() - Duration::minutes(5), now()), "5m");
        assert_eq!(format_relative(now() - Duration::hours(3), now()), "3h");
        assert_eq!(format_relative(now() - Duration::days(2), now()), "2d");
    }

    #[test]
    fn older_posts_show_a_date() {
        assert_eq!(format_relative(now() - Duration::days(30), now()), "May 16");
        let last_year = Utc.with_ymd_and_hms(2024, 12, 24, 9, 0, 0).unwrap();
        assert_eq!(format_relative(last_year, now()), "Dec 24, 2024");
    }

    #[test]
    fn clock_skew_reads_as_just_now() {
        assert_eq!(format_relative(now() + Duration::minutes(3), now()), "just now");
    }
}
