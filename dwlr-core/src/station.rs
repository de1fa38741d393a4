use crate::status::WaterLevelStatus;
use chrono::{DateTime, Utc};
use anyhow::Context;
use serde::Serialize;

pub type StationId = u32;

/// Number of monthly readings kept per station: the current month plus the 24 before it.
pub const HISTORY_LEN: usize = 25;

/// One month of a station's water level trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalReading {
    /// Month label, e.g. "Jan 24"
    pub date: String,
    /// Metres below ground level
    pub level: f64,
}

/// A Digital Water Level Recorder (DWLR) station.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: StationId,
    pub name: String,
    /// Administrative region (Indian state)
    pub state: String,
    pub lat: f64,
    pub lng: f64,
    /// Metres below ground level
    pub current_water_level: f64,
    pub last_updated: DateTime<Utc>,
    pub status: WaterLevelStatus,
    /// Readings ordered oldest first
    pub historical_data: Vec<HistoricalReading>,
    /// Recharge rate in mm/year
    pub recharge_rate: f64,
    pub aquifer_type: String,
}

impl Station {
    /// Display name for a station id, e.g. 5 -> "DWLR-1005".
    pub fn name_for(id: StationId) -> String {
        format!("DWLR-{}", 1000 + id)
    }

    /// Whether the stored status agrees with the current water level.
    pub fn is_status_consistent(&self) -> bool {
        self.status == WaterLevelStatus::from_level(self.current_water_level)
    }

    /// Pretty-printed JSON record for download.
    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self)
            .with_context(|| format!("failed to serialise station {}", self.name))
    }

    /// File name offered when downloading this station's record.
    pub fn export_file_name(&self) -> String {
        format!("{}.json", self.name)
    }
}

/// Find a station by id.
pub fn find_station(stations: &[Station], id: StationId) -> Option<&Station> {
    stations.iter().find(|s| s.id == id)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::TimeZone;

    /// A minimal station for unit tests.
    pub fn station(id: StationId, level: f64) -> Station {
        Station {
            id,
            name: Station::name_for(id),
            state: "Kerala".to_string(),
            lat: 10.0,
            lng: 76.0,
            current_water_level: level,
            last_updated: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            status: WaterLevelStatus::from_level(level),
            historical_data: vec![HistoricalReading {
                date: "May 24".to_string(),
                level,
            }],
            recharge_rate: 120.5,
            aquifer_type: "Alluvial".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::station;
    use super::*;

    #[test]
    fn test_name_for() {
        assert_eq!(Station::name_for(1), "DWLR-1001");
        assert_eq!(Station::name_for(5), "DWLR-1005");
        assert_eq!(Station::name_for(250), "DWLR-1250");
    }

    #[test]
    fn test_find_station() {
        let stations = vec![station(1, 5.0), station(2, 15.0), station(3, 25.0)];
        assert_eq!(find_station(&stations, 2).map(|s| s.id), Some(2));
        assert!(find_station(&stations, 9).is_none());
    }

    #[test]
    fn test_status_consistency() {
        let mut s = station(1, 25.0);
        assert!(s.is_status_consistent());
        s.status = WaterLevelStatus::Normal;
        assert!(!s.is_status_consistent());
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(station(7, 12.5)).unwrap();
        assert_eq!(json["currentWaterLevel"], 12.5);
        assert_eq!(json["status"], "Warning");
        assert_eq!(json["aquiferType"], "Alluvial");
        assert_eq!(json["historicalData"][0]["date"], "May 24");
        assert!(json.get("current_water_level").is_none());
    }

    #[test]
    fn test_export_json() {
        let s = station(5, 21.25);
        let json = s.to_json_pretty().unwrap();
        assert!(json.contains("\n  \"name\": \"DWLR-1005\""));
        assert!(json.contains("\"status\": \"Critical\""));
        assert!(json.contains("\"lastUpdated\": \"2024-05-01T12:00:00Z\""));
        assert_eq!(s.export_file_name(), "DWLR-1005.json");
    }
}
