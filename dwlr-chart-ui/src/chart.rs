//! Water level line chart rendered to SVG markup with plotters.
//!
//! Depth is measured in metres below ground, so the Y axis is inverted:
//! the surface (0 m) sits at the top and deeper readings plot lower. This is
//! done by plotting `-level` and labelling ticks with the absolute value.

use anyhow::ensure;
use dwlr_core::station::HistoricalReading;
use plotters::prelude::*;

pub const CHART_WIDTH: u32 = 460;
pub const CHART_HEIGHT: u32 = 256;

pub const Y_AXIS_LABEL: &str = "Meters Below Ground";
pub const SERIES_LABEL: &str = "Water Level";

const LINE_COLOR: RGBColor = RGBColor(0x3b, 0x82, 0xf6);
const GRID_COLOR: RGBColor = RGBColor(128, 128, 128);
const AXIS_TEXT_COLOR: RGBColor = RGBColor(0x6b, 0x72, 0x80);

/// Most month labels drawn along the X axis.
const MAX_MONTH_LABELS: usize = 6;
/// Depth spans shallower than this get one decimal on Y tick labels.
const FINE_TICK_SPAN_M: f64 = 5.0;

/// Plotted Y range as `(bottom, top)`: from just below the deepest reading up to the surface.
pub fn depth_range(readings: &[HistoricalReading]) -> (f64, f64) {
    let deepest = readings.iter().map(|r| r.level).fold(0.0, f64::max);
    (-(deepest * 1.1).max(1.0), 0.0)
}

/// Spacing between labelled months so that at most [`MAX_MONTH_LABELS`] are drawn.
fn month_label_step(count: usize) -> usize {
    count.div_ceil(MAX_MONTH_LABELS).max(1)
}

/// Whether month `index` gets an axis label. Labels are counted back from the
/// latest month so the current month is always labelled.
pub fn is_labelled_month(index: usize, count: usize) -> bool {
    index < count && (count - 1 - index) % month_label_step(count) == 0
}

/// Y tick text for a plotted (negative) depth on an axis spanning `span` metres.
pub fn depth_tick_label(depth: f64, span: f64) -> String {
    let decimals = if span < FINE_TICK_SPAN_M { 1 } else { 0 };
    format!("{:.*}", decimals, depth.abs())
}

/// Render `readings` (oldest first) as an SVG line chart.
pub fn render_water_level_svg(
    readings: &[HistoricalReading],
    size: (u32, u32),
) -> anyhow::Result<String> {
    ensure!(!readings.is_empty(), "no readings to chart");

    let (bottom, top) = depth_range(readings);
    let last_index = readings.len().saturating_sub(1).max(1);
    let label_style = ("sans-serif", 12).into_font().color(&AXIS_TEXT_COLOR);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(50)
            .build_cartesian_2d(0..last_index, bottom..top)?;

        chart
            .configure_mesh()
            .bold_line_style(GRID_COLOR.mix(0.2))
            .light_line_style(GRID_COLOR.mix(0.08))
            .x_labels(readings.len())
            .x_label_formatter(&|i: &usize| {
                if is_labelled_month(*i, readings.len()) {
                    readings[*i].date.clone()
                } else {
                    String::new()
                }
            })
            .y_labels(6)
            .y_label_formatter(&|depth: &f64| depth_tick_label(*depth, top - bottom))
            .y_desc(Y_AXIS_LABEL)
            .label_style(label_style.clone())
            .axis_desc_style(label_style)
            .draw()?;

        chart
            .draw_series(LineSeries::new(
                readings.iter().enumerate().map(|(i, r)| (i, -r.level)),
                LINE_COLOR.stroke_width(2),
            ))?
            .label(SERIES_LABEL)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], LINE_COLOR.stroke_width(2)));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(GRID_COLOR.mix(0.4))
            .draw()?;

        root.present()?;
    }
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings(levels: &[f64]) -> Vec<HistoricalReading> {
        let months = ["Jan 24", "Feb 24", "Mar 24", "Apr 24", "May 24", "Jun 24"];
        levels
            .iter()
            .zip(months.iter().cycle())
            .map(|(level, month)| HistoricalReading {
                date: month.to_string(),
                level: *level,
            })
            .collect()
    }

    #[test]
    fn test_depth_range_puts_surface_on_top() {
        let (bottom, top) = depth_range(&readings(&[3.0, 10.0, 7.5]));
        assert_eq!(top, 0.0);
        assert!(bottom <= -10.0);
    }

    #[test]
    fn test_depth_range_for_shallow_series() {
        let (bottom, top) = depth_range(&readings(&[0.0, 0.0]));
        assert_eq!((bottom, top), (-1.0, 0.0));
    }

    #[test]
    fn test_render_svg() {
        let data = readings(&[12.0, 14.5, 13.2, 16.8, 15.1, 11.9]);
        let svg = render_water_level_svg(&data, (CHART_WIDTH, CHART_HEIGHT)).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains(Y_AXIS_LABEL));
        assert!(svg.contains(SERIES_LABEL));
        assert!(svg.contains("Jan 24"));
    }

    /// Points of the water level polyline in SVG coordinates.
    fn series_points(svg: &str) -> Vec<(f64, f64)> {
        let element = svg
            .split('<')
            .find(|e| e.starts_with("polyline") && e.to_uppercase().contains("#3B82F6"))
            .expect("no water level polyline");
        let start = element.find("points=\"").unwrap() + "points=\"".len();
        let end = start + element[start..].find('"').unwrap();
        element[start..end]
            .split_whitespace()
            .map(|pair| {
                let (x, y) = pair.split_once(',').unwrap();
                (x.parse().unwrap(), y.parse().unwrap())
            })
            .collect()
    }

    fn monthly(count: usize) -> Vec<HistoricalReading> {
        (0..count)
            .map(|i| HistoricalReading {
                date: format!("m{:02}e", i),
                level: 10.0,
            })
            .collect()
    }

    #[test]
    fn test_deeper_readings_plot_lower() {
        let svg = render_water_level_svg(&readings(&[2.0, 30.0]), (CHART_WIDTH, CHART_HEIGHT)).unwrap();
        let points = series_points(&svg);
        assert_eq!(points.len(), 2);
        // SVG y grows downward, so the 30 m reading sits below the 2 m one
        assert!(points[1].1 > points[0].1);
        assert!(points[1].0 > points[0].0);
    }

    #[test]
    fn test_current_month_is_labelled() {
        let data = monthly(25);
        let svg = render_water_level_svg(&data, (CHART_WIDTH, CHART_HEIGHT)).unwrap();
        assert!(svg.contains("m24e"));
        assert!(svg.contains("m19e"));
        assert!(svg.contains("m04e"));
        assert!(!svg.contains("m23e"));
        assert!(!svg.contains("m00e"));
    }

    #[test]
    fn test_labelled_months() {
        let labelled: Vec<usize> = (0..25).filter(|i| is_labelled_month(*i, 25)).collect();
        assert_eq!(labelled, vec![4, 9, 14, 19, 24]);
        assert!(is_labelled_month(0, 1));
        assert!(!is_labelled_month(3, 3));
    }

    #[test]
    fn test_depth_tick_labels() {
        // Shallow axes get a decimal so neighbouring ticks stay distinct
        let ticks: Vec<String> = [0.0, -0.2, -0.4, -0.6, -0.8, -1.0]
            .iter()
            .map(|d| depth_tick_label(*d, 1.0))
            .collect();
        assert_eq!(ticks, vec!["0.0", "0.2", "0.4", "0.6", "0.8", "1.0"]);
        assert_eq!(depth_tick_label(-12.0, 33.0), "12");
    }

    #[test]
    fn test_render_single_reading() {
        let svg = render_water_level_svg(&readings(&[4.0]), (CHART_WIDTH, CHART_HEIGHT)).unwrap();
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_render_rejects_empty_series() {
        assert!(render_water_level_svg(&[], (CHART_WIDTH, CHART_HEIGHT)).is_err());
    }
}
