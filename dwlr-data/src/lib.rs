//! Synthetic data source for the groundwater dashboard.
//!
//! There is no backend: [`fetch_stations`] generates a fresh set of DWLR
//! stations on every call and hands them back after an artificial delay,
//! standing in for a network request.

pub mod config;
pub mod delay;
pub mod generator;
mod source;

pub use config::DashboardConfig;
pub use generator::StationGenerator;
pub use source::fetch_stations;
