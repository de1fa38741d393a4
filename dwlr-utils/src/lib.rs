//! Shared utility functions for DWLR crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, Datelike, Local, Months, NaiveDate, Utc};

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Short month label used on chart axes, e.g. "Jan 24".
    pub fn month_label(date: &NaiveDate) -> String {
        date.format("%b %y").to_string()
    }

    /// First day of the month `months_back` months before `date`'s month.
    ///
    /// Returns None only when the result would fall outside chrono's range.
    pub fn first_of_month_before(date: &NaiveDate, months_back: u32) -> Option<NaiveDate> {
        let first = date.with_day(1)?;
        first.checked_sub_months(Months::new(months_back))
    }

    /// The first day of each of the `count` months ending at `date`'s month,
    /// oldest first.
    pub fn trailing_months(date: &NaiveDate, count: u32) -> Vec<NaiveDate> {
        (0..count)
            .rev()
            .filter_map(|back| first_of_month_before(date, back))
            .collect()
    }

    /// Render a UTC timestamp as a calendar date in the viewer's timezone.
    pub fn display_date(timestamp: &DateTime<Utc>) -> String {
        format_date(&timestamp.with_timezone(&Local).date_naive())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_month_label() {
            let date = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
            assert_eq!(month_label(&date), "Jan 24");

            let date = NaiveDate::from_ymd_opt(2009, 12, 1).unwrap();
            assert_eq!(month_label(&date), "Dec 09");
        }

        #[test]
        fn test_first_of_month_before() {
            let date = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
            assert_eq!(
                first_of_month_before(&date, 0),
                NaiveDate::from_ymd_opt(2024, 3, 1)
            );
            assert_eq!(
                first_of_month_before(&date, 1),
                NaiveDate::from_ymd_opt(2024, 2, 1)
            );
            // Crosses a year boundary
            assert_eq!(
                first_of_month_before(&date, 24),
                NaiveDate::from_ymd_opt(2022, 3, 1)
            );
        }

        #[test]
        fn test_trailing_months() {
            let date = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
            let months = trailing_months(&date, 25);
            assert_eq!(months.len(), 25);
            assert_eq!(months[0], NaiveDate::from_ymd_opt(2022, 2, 1).unwrap());
            assert_eq!(months[24], NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
            assert!(months.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn test_format_date() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 5).unwrap();
            assert_eq!(format_date(&date), "2023-06-05");
        }
    }
}

/// Numeric helpers
pub mod numbers {
    /// Round `value` to a fixed number of decimal places.
    pub fn round_to(value: f64, decimals: i32) -> f64 {
        let factor = 10f64.powi(decimals);
        (value * factor).round() / factor
    }

}
