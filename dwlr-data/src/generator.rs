//! Seedable generator for synthetic station records.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use dwlr_core::projection::MapBounds;
use dwlr_core::station::{HistoricalReading, Station, StationId, HISTORY_LEN};
use dwlr_core::status::WaterLevelStatus;
use dwlr_utils::dates::{month_label, trailing_months};
use dwlr_utils::numbers::round_to;
use log::debug;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const INDIAN_STATES: [&str; 28] = [
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
];

pub const AQUIFER_TYPES: [&str; 5] = [
    "Alluvial",
    "Hard Rock",
    "Coastal Sedimentary",
    "Volcanic Rock",
    "Mountainous",
];

/// Current water level range in metres below ground.
const LEVEL_MIN_M: f64 = 2.0;
const LEVEL_MAX_M: f64 = 35.0;
/// Recharge rate range in mm/year.
const RECHARGE_MIN: f64 = 50.0;
const RECHARGE_MAX: f64 = 400.0;
/// Stations report at some point within the last week.
const LAST_UPDATED_WINDOW_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Half-width of the uniform noise added to each monthly reading.
const MONTHLY_NOISE_M: f64 = 2.0;
const SEASONAL_AMPLITUDE_M: f64 = 5.0;
const SEASONAL_PERIOD_MONTHS: f64 = 4.0;

/// Generates station records from a ChaCha8 stream.
///
/// The same seed and `now` always produce the same stations.
pub struct StationGenerator {
    rng: ChaCha8Rng,
    bounds: MapBounds,
    seed: u64,
}

impl StationGenerator {
    pub fn from_seed(seed: u64, bounds: MapBounds) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            bounds,
            seed,
        }
    }

    /// Use `seed` when given, otherwise pick a random one.
    pub fn new(seed: Option<u64>, bounds: MapBounds) -> Self {
        Self::from_seed(seed.unwrap_or_else(rand::random), bounds)
    }

    /// Seed of the underlying stream, for reproducing a session.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate `count` stations with ids `1..=count`.
    pub fn generate(&mut self, count: usize, now: DateTime<Utc>) -> Vec<Station> {
        debug!("generating {} stations with seed {}", count, self.seed);
        (1..=count as StationId)
            .map(|id| self.station(id, now))
            .collect()
    }

    fn station(&mut self, id: StationId, now: DateTime<Utc>) -> Station {
        let rng = &mut self.rng;
        let current_water_level = round_to(rng.gen_range(LEVEL_MIN_M..LEVEL_MAX_M), 2);
        let age = TimeDelta::milliseconds(rng.gen_range(0..LAST_UPDATED_WINDOW_MS));
        let state = INDIAN_STATES.choose(rng).copied().unwrap_or_default();
        let lat = rng.gen_range(self.bounds.lat_min..self.bounds.lat_max);
        let lng = rng.gen_range(self.bounds.lng_min..self.bounds.lng_max);
        let historical_data = historical_series(rng, current_water_level, &now.date_naive());
        let recharge_rate = round_to(rng.gen_range(RECHARGE_MIN..RECHARGE_MAX), 1);
        let aquifer_type = AQUIFER_TYPES.choose(rng).copied().unwrap_or_default();

        Station {
            id,
            name: Station::name_for(id),
            state: state.to_string(),
            lat,
            lng,
            current_water_level,
            last_updated: now - age,
            status: WaterLevelStatus::from_level(current_water_level),
            historical_data,
            recharge_rate,
            aquifer_type: aquifer_type.to_string(),
        }
    }
}

/// Monthly readings for the 24 months before `today`'s month plus the
/// current month, oldest first.
///
/// Each reading is the current level plus uniform noise and a slow sinusoid,
/// floored at zero and rounded to centimetres.
pub fn historical_series<R: Rng + ?Sized>(
    rng: &mut R,
    current_level: f64,
    today: &NaiveDate,
) -> Vec<HistoricalReading> {
    let months = trailing_months(today, HISTORY_LEN as u32);
    let newest = months.len().saturating_sub(1);
    months
        .iter()
        .enumerate()
        .map(|(i, month)| {
            let months_back = (newest - i) as u32;
            let fluctuation = rng.gen_range(-MONTHLY_NOISE_M..=MONTHLY_NOISE_M);
            let seasonal =
                (f64::from(months_back) / SEASONAL_PERIOD_MONTHS).sin() * SEASONAL_AMPLITUDE_M;
            let level = (current_level + fluctuation + seasonal).max(0.0);
            HistoricalReading {
                date: month_label(month),
                level: round_to(level, 2),
            }
        })
        .collect()
}
