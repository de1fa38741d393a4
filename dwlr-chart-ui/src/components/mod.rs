//! Dioxus RSX components for the groundwater dashboard.

mod error_display;
mod header;
mod icons;
mod legend;
mod loading_spinner;
mod stat_card;
mod station_details;
mod station_map;
mod summary_cards;
mod water_level_chart;

pub use error_display::ErrorDisplay;
pub use header::Header;
pub use icons::{CloseIcon, MapPinIcon};
pub use legend::Legend;
pub use loading_spinner::LoadingSpinner;
pub use stat_card::StatCard;
pub use station_details::StationDetails;
pub use station_map::StationMap;
pub use summary_cards::SummaryCards;
pub use water_level_chart::WaterLevelChart;
