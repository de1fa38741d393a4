use serde::Serialize;
use std::fmt;

/// Depth (metres below ground) above which a station is Critical.
pub const CRITICAL_THRESHOLD_M: f64 = 20.0;
/// Depth (metres below ground) above which a station is at least Warning.
pub const WARNING_THRESHOLD_M: f64 = 10.0;

/// Severity classification of a station's current water level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum WaterLevelStatus {
    Critical,
    Warning,
    Normal,
    /// Never produced by classification; used for absent data and neutral colouring.
    #[default]
    Unknown,
}

impl WaterLevelStatus {
    /// Statuses shown in the map legend.
    pub const LEGEND: [WaterLevelStatus; 3] = [
        WaterLevelStatus::Normal,
        WaterLevelStatus::Warning,
        WaterLevelStatus::Critical,
    ];

    /// Classify a water level given in metres below ground.
    pub fn from_level(level: f64) -> Self {
        if level > CRITICAL_THRESHOLD_M {
            WaterLevelStatus::Critical
        } else if level > WARNING_THRESHOLD_M {
            WaterLevelStatus::Warning
        } else {
            WaterLevelStatus::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WaterLevelStatus::Critical => "Critical",
            WaterLevelStatus::Warning => "Warning",
            WaterLevelStatus::Normal => "Normal",
            WaterLevelStatus::Unknown => "Unknown",
        }
    }

    /// Colours used to draw this status.
    pub fn style(&self) -> StatusStyle {
        style_for(*self)
    }
}

impl fmt::Display for WaterLevelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marker and badge colours for one status, as CSS colour values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    /// Marker dot and legend swatch
    pub dot: &'static str,
    /// Badge text
    pub text: &'static str,
    /// Badge background
    pub bg: &'static str,
}

/// Neutral gray, used for Unknown and for any status missing from the table.
pub const NEUTRAL_STYLE: StatusStyle = StatusStyle {
    dot: "#6b7280",
    text: "#1f2937",
    bg: "#f3f4f6",
};

const STATUS_STYLES: [(WaterLevelStatus, StatusStyle); 4] = [
    (
        WaterLevelStatus::Normal,
        StatusStyle {
            dot: "#22c55e",
            text: "#166534",
            bg: "#dcfce7",
        },
    ),
    (
        WaterLevelStatus::Warning,
        StatusStyle {
            dot: "#eab308",
            text: "#854d0e",
            bg: "#fef9c3",
        },
    ),
    (
        WaterLevelStatus::Critical,
        StatusStyle {
            dot: "#ef4444",
            text: "#991b1b",
            bg: "#fee2e2",
        },
    ),
    (WaterLevelStatus::Unknown, NEUTRAL_STYLE),
];

/// Look up the colours for a status, falling back to [`NEUTRAL_STYLE`].
pub fn style_for(status: WaterLevelStatus) -> StatusStyle {
    STATUS_STYLES
        .iter()
        .find(|(s, _)| *s == status)
        .map(|(_, style)| *style)
        .unwrap_or(NEUTRAL_STYLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_level_thresholds() {
        assert_eq!(WaterLevelStatus::from_level(0.0), WaterLevelStatus::Normal);
        assert_eq!(WaterLevelStatus::from_level(10.0), WaterLevelStatus::Normal);
        assert_eq!(WaterLevelStatus::from_level(10.01), WaterLevelStatus::Warning);
        assert_eq!(WaterLevelStatus::from_level(20.0), WaterLevelStatus::Warning);
        assert_eq!(WaterLevelStatus::from_level(20.01), WaterLevelStatus::Critical);
        assert_eq!(WaterLevelStatus::from_level(35.0), WaterLevelStatus::Critical);
    }

    #[test]
    fn test_every_status_has_a_style() {
        for status in WaterLevelStatus::LEGEND
            .into_iter()
            .chain([WaterLevelStatus::Unknown])
        {
            let style = style_for(status);
            assert!(style.dot.starts_with('#'));
        }
        assert_eq!(style_for(WaterLevelStatus::Unknown), NEUTRAL_STYLE);
        assert_eq!(WaterLevelStatus::Critical.style().dot, "#ef4444");
    }

    #[test]
    fn test_legend_excludes_unknown() {
        assert!(!WaterLevelStatus::LEGEND.contains(&WaterLevelStatus::Unknown));
        assert_eq!(WaterLevelStatus::LEGEND.len(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(WaterLevelStatus::Warning.to_string(), "Warning");
        assert_eq!(WaterLevelStatus::default(), WaterLevelStatus::Unknown);
    }
}
