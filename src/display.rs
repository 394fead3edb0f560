use chrono::{DateTime, Utc};

use crate::classify::{self, Classification};
use crate::config::Config;
use crate::readings::Reading;

/// Printed verbatim when the service returns zero readings. Not an error;
/// the host shows it until the next refresh produces data.
pub const NO_READINGS: &str = "NO READINGS";

/// Renders the whole run result: the classified most recent reading, or the
/// `NO READINGS` literal when the window came back empty.
pub fn render(readings: &[Reading], config: &Config, now: DateTime<Utc>) -> String {
    match readings.last() {
        Some(latest) => render_line(latest, &classify::classify(latest, config), now),
        None => NO_READINGS.to_string(),
    }
}

/// Composes the status line the menu-bar host renders:
/// `62 mg/dL (5m) | templateImage=iVBOR... | color=red`. The image and
/// color segments are appended only when the classification produced them.
pub fn render_line(
    reading: &Reading,
    classification: &Classification,
    now: DateTime<Utc>,
) -> String {
    let mut line = format!(
        "{} mg/dL ({})",
        reading.value,
        format_time_ago(reading.timestamp, now)
    );

    if let Some(icon) = classification.icon {
        line.push_str(" | templateImage=");
        line.push_str(icon);
    }
    if let Some(color) = classification.color {
        line.push_str(" | color=");
        line.push_str(&color.to_string());
    }

    line
}

/// en-US mini-style relative age at minute granularity: "now" when the
/// delta rounds to zero minutes, then "Nm", "Nh", "Nd". Readings dated in
/// the future (clock skew) clamp to "now".
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = now.signed_duration_since(then).num_minutes().max(0);

    if minutes == 0 {
        "now".to_string()
    } else if minutes < 60 {
        format!("{}m", minutes)
    } else if minutes < 24 * 60 {
        format!("{}h", minutes / 60)
    } else {
        format!("{}d", minutes / (24 * 60))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{ColorTier, Trend};
    use chrono::TimeZone;

    fn reading_at(millis: i64, value: i32, trend: i64) -> Reading {
        Reading {
            raw_timestamp: format!("/Date({millis})/"),
            value,
            trend: Trend::from_code(trend),
            timestamp: DateTime::from_timestamp_millis(millis).unwrap(),
        }
    }

    #[test]
    fn test_time_ago_tiers() {
        let now = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();
        assert_eq!(format_time_ago(now, now), "now");
        assert_eq!(
            format_time_ago(now - chrono::Duration::seconds(30), now),
            "now"
        );
        assert_eq!(
            format_time_ago(now - chrono::Duration::minutes(5), now),
            "5m"
        );
        assert_eq!(
            format_time_ago(now - chrono::Duration::minutes(59), now),
            "59m"
        );
        assert_eq!(
            format_time_ago(now - chrono::Duration::hours(3), now),
            "3h"
        );
        assert_eq!(
            format_time_ago(now - chrono::Duration::days(2), now),
            "2d"
        );
    }

    #[test]
    fn test_future_reading_clamps_to_now() {
        let now = Utc::now();
        assert_eq!(format_time_ago(now + chrono::Duration::minutes(3), now), "now");
    }

    #[test]
    fn test_render_line_with_icon_and_color() {
        let reading = reading_at(1700000000000, 62, 1);
        let now = reading.timestamp + chrono::Duration::minutes(4);
        let classification = Classification {
            icon: reading.trend.icon(),
            color: Some(ColorTier::Red),
        };

        let line = render_line(&reading, &classification, now);
        assert!(line.starts_with("62 mg/dL ("));
        assert!(line.contains("(4m)"));
        assert!(line.contains(" | color=red"));
        let image = line
            .split(" | templateImage=")
            .nth(1)
            .and_then(|rest| rest.split(" | ").next())
            .unwrap();
        assert!(!image.is_empty());
    }

    #[test]
    fn test_render_line_without_optional_segments() {
        let reading = reading_at(1700000000000, 120, 8);
        let now = reading.timestamp;
        let classification = Classification {
            icon: reading.trend.icon(),
            color: None,
        };

        assert_eq!(
            render_line(&reading, &classification, now),
            "120 mg/dL (now)"
        );
    }

    fn default_config() -> Config {
        toml::from_str(
            r#"
            account_name = "publisher"
            password = "hunter2"
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_render_empty_set_is_no_readings_literal() {
        let now = Utc::now();
        assert_eq!(render(&[], &default_config(), now), "NO READINGS");
    }

    #[test]
    fn test_render_low_reading_end_to_end() {
        let reading = reading_at(1700000000000, 62, 1);
        let now = reading.timestamp + chrono::Duration::minutes(5);

        let line = render(&[reading], &default_config(), now);
        assert!(line.starts_with("62 mg/dL ("));
        assert!(line.contains("color=red"));
        assert!(line.contains("templateImage=iVBOR"));
    }
}
