//! Shared Dioxus components and SVG chart rendering for the groundwater dashboard.
//!
//! This crate provides:
//! - `chart`: water level line chart rendered to an SVG string with plotters
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: RSX components (header, map, legend, detail panel, etc.)

pub mod chart;
pub mod components;
pub mod state;
