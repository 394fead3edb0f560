use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::classify::Trend;
use crate::error::{Result, ShareError};

/// One reading as the Share service returns it, e.g.
/// `{"WT": "/Date(1700000000000)/", "Value": 120, "Trend": 4}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReading {
    #[serde(rename = "WT")]
    pub raw_timestamp: String,
    #[serde(rename = "Value")]
    pub value: i32,
    #[serde(rename = "Trend")]
    pub trend: Trend,
}

/// A normalized reading with its timestamp resolved.
#[derive(Debug, Clone)]
pub struct Reading {
    pub raw_timestamp: String,
    pub value: i32,
    pub trend: Trend,
    pub timestamp: DateTime<Utc>,
}

/// Extracts the epoch-milliseconds value embedded in a Share timestamp
/// string. The service decorates the number (`/Date(1700000000000)/`, with
/// an optional trailing zone offset); the contract here is the first
/// contiguous run of ASCII digits. Fails when the string contains none.
pub fn parse_share_timestamp(raw: &str) -> Result<i64> {
    let start = raw
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| ShareError::Parse(format!("no numeric timestamp in {raw:?}")))?;
    let end = raw[start..]
        .find(|c: char| !c.is_ascii_digit())
        .map(|offset| start + offset)
        .unwrap_or(raw.len());

    raw[start..end]
        .parse::<i64>()
        .map_err(|_| ShareError::Parse(format!("timestamp out of range in {raw:?}")))
}

/// Resolves every raw timestamp and sorts ascending. The sort is stable, so
/// readings with equal timestamps keep their input order.
pub fn normalize(raw: Vec<RawReading>) -> Result<Vec<Reading>> {
    let mut readings = Vec::with_capacity(raw.len());
    for reading in raw {
        let millis = parse_share_timestamp(&reading.raw_timestamp)?;
        let timestamp = DateTime::from_timestamp_millis(millis)
            .ok_or_else(|| ShareError::Parse(format!("timestamp out of range: {millis}")))?;
        readings.push(Reading {
            raw_timestamp: reading.raw_timestamp,
            value: reading.value,
            trend: reading.trend,
            timestamp,
        });
    }

    readings.sort_by_key(|r| r.timestamp);
    Ok(readings)
}
