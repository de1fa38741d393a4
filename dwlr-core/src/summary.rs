use crate::station::Station;
use anyhow::Context;
use crate::status::WaterLevelStatus;
use serde::Serialize;

/// Station counts shown in the dashboard's summary row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub normal: usize,
    pub warning: usize,
    pub critical: usize,
}

impl Summary {
    pub fn from_stations(stations: &[Station]) -> Self {
        stations.iter().fold(
            Summary {
                count: stations.len(),
                ..Summary::default()
            },
            |mut acc, station| {
                match station.status {
                    WaterLevelStatus::Normal => acc.normal += 1,
                    WaterLevelStatus::Warning => acc.warning += 1,
                    WaterLevelStatus::Critical => acc.critical += 1,
                    WaterLevelStatus::Unknown => {}
                }
                acc
            },
        )
    }

    /// Stations with a known status. Equals `count` unless some are Unknown.
    pub fn classified(&self) -> usize {
        self.normal + self.warning + self.critical
    }

    /// Compact JSON form, as logged by the dashboard.
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(self).context("failed to serialise summary")
    }
}
