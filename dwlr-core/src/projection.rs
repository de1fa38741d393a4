//! Naive linear projection of latitude/longitude onto a map overlay.
//!
//! Positions are percentages of the map container: `top` grows southwards
//! and `left` grows eastwards. Points outside the bounding box are not
//! clamped, so their markers land outside the visible map.

use anyhow::ensure;
use serde::Serialize;

/// Geographic rectangle covered by the map overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapBounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

/// Bounding box for India.
pub const INDIA_BOUNDS: MapBounds = MapBounds {
    lat_min: 8.4,
    lat_max: 37.6,
    lng_min: 68.7,
    lng_max: 97.25,
};

impl Default for MapBounds {
    fn default() -> Self {
        INDIA_BOUNDS
    }
}

impl MapBounds {
    pub fn new(lat_min: f64, lat_max: f64, lng_min: f64, lng_max: f64) -> anyhow::Result<Self> {
        ensure!(
            lat_min < lat_max,
            "latitude range is empty: {} .. {}",
            lat_min,
            lat_max
        );
        ensure!(
            lng_min < lng_max,
            "longitude range is empty: {} .. {}",
            lng_min,
            lng_max
        );
        Ok(Self {
            lat_min,
            lat_max,
            lng_min,
            lng_max,
        })
    }

    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&lat) && (self.lng_min..=self.lng_max).contains(&lng)
    }

    /// Project a point to a percentage position inside the map container.
    pub fn project(&self, lat: f64, lng: f64) -> MapPosition {
        let top = 100.0 - (lat - self.lat_min) / (self.lat_max - self.lat_min) * 100.0;
        let left = (lng - self.lng_min) / (self.lng_max - self.lng_min) * 100.0;
        MapPosition { top, left }
    }
}

/// Percentage offsets from the top-left corner of the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapPosition {
    pub top: f64,
    pub left: f64,
}

impl MapPosition {
    /// Inline CSS for an absolutely positioned element.
    pub fn css(&self) -> String {
        format!("top: {}%; left: {}%;", self.top, self.left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_position(pos: MapPosition, top: f64, left: f64) {
        assert!((pos.top - top).abs() < EPS, "top {} != {}", pos.top, top);
        assert!((pos.left - left).abs() < EPS, "left {} != {}", pos.left, left);
    }

    #[test]
    fn test_corners() {
        let b = INDIA_BOUNDS;
        // North-west corner is the top-left of the map
        assert_position(b.project(b.lat_max, b.lng_min), 0.0, 0.0);
        // South-east corner is the bottom-right
        assert_position(b.project(b.lat_min, b.lng_max), 100.0, 100.0);
        assert_position(b.project(b.lat_min, b.lng_min), 100.0, 0.0);
        assert_position(b.project(b.lat_max, b.lng_max), 0.0, 100.0);
    }

    #[test]
    fn test_center() {
        let b = INDIA_BOUNDS;
        let lat = (b.lat_min + b.lat_max) / 2.0;
        let lng = (b.lng_min + b.lng_max) / 2.0;
        assert_position(b.project(lat, lng), 50.0, 50.0);
    }

    #[test]
    fn test_outside_points_are_not_clamped() {
        let b = INDIA_BOUNDS;
        let pos = b.project(b.lat_max + 29.2, b.lng_min - 28.55);
        assert!(pos.top < 0.0);
        assert!(pos.left < 0.0);
        assert_position(pos, -100.0, -100.0);
        assert!(!b.contains(b.lat_max + 1.0, b.lng_min));
    }

    #[test]
    fn test_new_rejects_empty_ranges() {
        assert!(MapBounds::new(10.0, 10.0, 0.0, 1.0).is_err());
        assert!(MapBounds::new(0.0, 1.0, 5.0, 4.0).is_err());
        assert!(MapBounds::new(f64::NAN, 1.0, 0.0, 1.0).is_err());
        let b = MapBounds::new(8.4, 37.6, 68.7, 97.25).unwrap();
        assert_eq!(b, INDIA_BOUNDS);
    }

    #[test]
    fn test_css() {
        let pos = MapPosition {
            top: 25.0,
            left: 62.5,
        };
        assert_eq!(pos.css(), "top: 25%; left: 62.5%;");
    }
}
