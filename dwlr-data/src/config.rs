//! Dashboard configuration.
//!
//! Defaults reproduce the stock dashboard. In the browser, query
//! parameters can override them, e.g. `index.html?seed=42&stations=100&delay=0`.
//! `bounds=latMin,latMax,lngMin,lngMax` moves the map to another region.

use anyhow::{bail, ensure, Context};
use dwlr_core::projection::{MapBounds, INDIA_BOUNDS};
use log::{info, warn};
use std::time::Duration;

pub const DEFAULT_STATION_COUNT: usize = 250;
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(500);
/// Upper limit for the `stations` override.
pub const MAX_STATION_COUNT: usize = 5_000;

/// Query parameters understood by [`DashboardConfig::apply_param`].
pub const PARAM_KEYS: [&str; 4] = ["seed", "stations", "delay", "bounds"];

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Number of stations generated per load
    pub station_count: usize,
    /// Artificial latency before the stations are handed back
    pub load_delay: Duration,
    /// Fixed generator seed; random per load when None
    pub seed: Option<u64>,
    /// Region stations are placed in and the map covers
    pub bounds: MapBounds,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            station_count: DEFAULT_STATION_COUNT,
            load_delay: DEFAULT_LOAD_DELAY,
            seed: None,
            bounds: INDIA_BOUNDS,
        }
    }
}

impl DashboardConfig {
    /// Apply one `key=value` override.
    pub fn apply_param(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let value = value.trim();
        match key {
            "seed" => {
                self.seed = Some(value.parse().with_context(|| format!("invalid seed: {value:?}"))?);
            }
            "stations" => {
                let count: usize = value
                    .parse()
                    .with_context(|| format!("invalid station count: {value:?}"))?;
                ensure!(
                    (1..=MAX_STATION_COUNT).contains(&count),
                    "station count must be between 1 and {}, got {}",
                    MAX_STATION_COUNT,
                    count
                );
                self.station_count = count;
            }
            "delay" => {
                let millis: u64 = value
                    .parse()
                    .with_context(|| format!("invalid delay: {value:?}"))?;
                self.load_delay = Duration::from_millis(millis);
            }
            "bounds" => self.bounds = parse_bounds(value)?,
            other => bail!("unknown parameter: {}", other),
        }
        Ok(())
    }

    /// Defaults with every valid override applied; invalid ones are logged and skipped.
    pub fn from_params<'a, I>(params: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (key, value) in params {
            match config.apply_param(key, value) {
                Ok(()) => info!("config override {}={}", key, value),
                Err(e) => warn!("ignoring query parameter {}: {:#}", key, e),
            }
        }
        config
    }

    /// Read overrides from the page URL's query string.
    #[cfg(target_arch = "wasm32")]
    pub fn from_location() -> Self {
        let pairs = query_pairs().unwrap_or_default();
        Self::from_params(pairs.iter().map(|(k, v)| (*k, v.as_str())))
    }
}

/// Parse `latMin,latMax,lngMin,lngMax` in degrees.
fn parse_bounds(value: &str) -> anyhow::Result<MapBounds> {
    let parts = value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("invalid coordinate: {part:?}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let [lat_min, lat_max, lng_min, lng_max] = parts[..] else {
        bail!("bounds need 4 values, got {}", parts.len());
    };
    MapBounds::new(lat_min, lat_max, lng_min, lng_max)
}

#[cfg(target_arch = "wasm32")]
fn query_pairs() -> Option<Vec<(&'static str, String)>> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    Some(
        PARAM_KEYS
            .iter()
            .filter_map(|key| params.get(key).map(|value| (*key, value)))
            .collect(),
    )
}
