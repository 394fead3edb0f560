use serde::Deserialize;

use crate::config::Config;
use crate::icons;
use crate::readings::Reading;

/// Sensor trend direction as reported by the Share service. The wire format
/// is an integer code 1-9; anything outside that range lands in `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    DoubleUp,
    SingleUp,
    FortyFiveUp,
    Flat,
    FortyFiveDown,
    SingleDown,
    DoubleDown,
    NotComputable,
    OutOfRange,
    Unknown(i64),
}

impl Trend {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Trend::DoubleUp,
            2 => Trend::SingleUp,
            3 => Trend::FortyFiveUp,
            4 => Trend::Flat,
            5 => Trend::FortyFiveDown,
            6 => Trend::SingleDown,
            7 => Trend::DoubleDown,
            8 => Trend::NotComputable,
            9 => Trend::OutOfRange,
            other => Trend::Unknown(other),
        }
    }

    /// Arrow glyph for this trend, as a base64 template PNG the menu-bar
    /// host renders. Non-directional trends have no glyph.
    pub fn icon(&self) -> Option<&'static str> {
        match self {
            Trend::DoubleUp | Trend::SingleUp => Some(icons::RISING),
            Trend::FortyFiveUp => Some(icons::RISING_SLIGHTLY),
            Trend::Flat => Some(icons::FLAT),
            Trend::FortyFiveDown => Some(icons::FALLING_SLIGHTLY),
            Trend::SingleDown | Trend::DoubleDown => Some(icons::FALLING),
            Trend::NotComputable | Trend::OutOfRange | Trend::Unknown(_) => None,
        }
    }
}

impl<'de> serde::Deserialize<'de> for Trend {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = i64::deserialize(deserializer)?;
        Ok(Trend::from_code(code))
    }
}

/// Warning tier for the host's `color=` parameter. "No highlight" is the
/// absence of a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTier {
    Yellow,
    Red,
}

impl std::fmt::Display for ColorTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorTier::Yellow => write!(f, "yellow"),
            ColorTier::Red => write!(f, "red"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Classification {
    pub icon: Option<&'static str>,
    pub color: Option<ColorTier>,
}

pub fn classify(reading: &Reading, config: &Config) -> Classification {
    Classification {
        icon: reading.trend.icon(),
        color: color_for(
            reading.value,
            config.low_threshold,
            config.high_threshold,
            config.threshold_deviation,
        ),
    }
}

/// `Red` outside the hard thresholds, `Yellow` within `deviation` of either
/// threshold, `None` in the comfortable middle.
pub fn color_for(value: i32, low: i32, high: i32, deviation: i32) -> Option<ColorTier> {
    if value <= low || value >= high {
        Some(ColorTier::Red)
    } else if value <= low + deviation || value >= high - deviation {
        Some(ColorTier::Yellow)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_categories_cover_all_codes() {
        assert_eq!(Trend::from_code(1).icon(), Some(icons::RISING));
        assert_eq!(Trend::from_code(2).icon(), Some(icons::RISING));
        assert_eq!(Trend::from_code(3).icon(), Some(icons::RISING_SLIGHTLY));
        assert_eq!(Trend::from_code(4).icon(), Some(icons::FLAT));
        assert_eq!(Trend::from_code(5).icon(), Some(icons::FALLING_SLIGHTLY));
        assert_eq!(Trend::from_code(6).icon(), Some(icons::FALLING));
        assert_eq!(Trend::from_code(7).icon(), Some(icons::FALLING));
        assert_eq!(Trend::from_code(8).icon(), None);
        assert_eq!(Trend::from_code(9).icon(), None);
    }

    #[test]
    fn test_undefined_codes_have_no_icon() {
        for code in [0, 10, -3, 42] {
            let trend = Trend::from_code(code);
            assert_eq!(trend, Trend::Unknown(code));
            assert_eq!(trend.icon(), None);
        }
    }

    #[test]
    fn test_exactly_five_icon_assets() {
        let mut seen: Vec<&'static str> = (1..=9)
            .filter_map(|code| Trend::from_code(code).icon())
            .collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_trend_deserializes_from_integer_code() {
        let trend: Trend = serde_json::from_str("4").unwrap();
        assert_eq!(trend, Trend::Flat);
        let trend: Trend = serde_json::from_str("12").unwrap();
        assert_eq!(trend, Trend::Unknown(12));
    }

    #[test]
    fn test_color_red_at_and_beyond_thresholds() {
        assert_eq!(color_for(65, 65, 200, 5), Some(ColorTier::Red));
        assert_eq!(color_for(40, 65, 200, 5), Some(ColorTier::Red));
        assert_eq!(color_for(200, 65, 200, 5), Some(ColorTier::Red));
        assert_eq!(color_for(250, 65, 200, 5), Some(ColorTier::Red));
    }

    #[test]
    fn test_color_yellow_inside_deviation_band() {
        assert_eq!(color_for(66, 65, 200, 5), Some(ColorTier::Yellow));
        assert_eq!(color_for(70, 65, 200, 5), Some(ColorTier::Yellow));
        assert_eq!(color_for(195, 65, 200, 5), Some(ColorTier::Yellow));
        assert_eq!(color_for(199, 65, 200, 5), Some(ColorTier::Yellow));
    }

    #[test]
    fn test_color_none_in_the_middle() {
        assert_eq!(color_for(71, 65, 200, 5), None);
        assert_eq!(color_for(120, 65, 200, 5), None);
        assert_eq!(color_for(194, 65, 200, 5), None);
    }

    #[test]
    fn test_color_tier_display() {
        assert_eq!(ColorTier::Yellow.to_string(), "yellow");
        assert_eq!(ColorTier::Red.to_string(), "red");
    }
}
