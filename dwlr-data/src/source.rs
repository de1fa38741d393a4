use crate::config::DashboardConfig;
use crate::delay::sleep;
use crate::generator::StationGenerator;
use chrono::Utc;
use dwlr_core::station::Station;
use log::info;

/// Generate the session's stations and return them after the configured delay.
///
/// Never fails. If the runtime never fires the timer, the future never resolves.
pub async fn fetch_stations(config: &DashboardConfig) -> Vec<Station> {
    let mut generator = StationGenerator::new(config.seed, config.bounds);
    let stations = generator.generate(config.station_count, Utc::now());
    info!(
        "Generated {} stations (seed {}), delivering in {}ms",
        stations.len(),
        generator.seed(),
        config.load_delay.as_millis()
    );
    sleep(config.load_delay).await;
    stations
}
