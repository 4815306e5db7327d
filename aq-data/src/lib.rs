//! Daily air quality synthesis for the dashboard.
//!
//! This crate turns the sparse EPA annual summary into a dense daily
//! series, and shapes that series into the labeled form the charts
//! consume.

pub mod dashboard;
pub mod filter;
pub mod series;
pub mod statistics;
pub mod synthesis;

pub use dashboard::{AirQualityData, GeneratorConfig};
pub use filter::{available_months, filter_by_month_year, AvailableMonths, FilterQuery};
pub use series::{DailySample, DailySeries, Dataset, LabeledSeries};
pub use statistics::{yearly_statistics, YearlyStatistics};
pub use synthesis::generate_daily_series;

/// Deterministic estimates for years the monitor did not report.
///
/// Neither function uses randomness or weekday effects: they describe a
/// smooth year-over-year trend with a two-bucket seasonal shape.
pub mod interpolation {
    use aq_epa::pollutant::ozone_ppm_to_ugm3;
    use aq_epa::season::Season;

    /// First year of the trend lines.
    pub const TREND_BASE_YEAR: i32 = 2014;

    /// Typical ozone level in ppm.
    pub const OZONE_BASE_PPM: f64 = 0.04;
    /// Ozone drifts up 0.2% a year.
    pub const OZONE_YEARLY_TREND: f64 = 0.002;

    /// Typical PM2.5 level in µg/m³.
    pub const PM25_BASE: f64 = 7.0;
    /// PM2.5 drifts down 1% a year.
    pub const PM25_YEARLY_TREND: f64 = 0.01;

    fn years_since_base(year: i32) -> f64 {
        (year - TREND_BASE_YEAR) as f64
    }

    /// Ozone estimate in µg/m³ for a month of a year without annual data.
    pub fn ozone_for_missing_year(year: i32, month: u32) -> f64 {
        let seasonal = if Season::from_month(month).is_summer() {
            1.3
        } else {
            0.8
        };
        let trend = 1.0 + years_since_base(year) * OZONE_YEARLY_TREND;
        ozone_ppm_to_ugm3(OZONE_BASE_PPM * seasonal * trend)
    }

    /// PM2.5 estimate in µg/m³ for a month of a year without annual data.
    pub fn pm25_for_missing_year(year: i32, month: u32) -> f64 {
        let seasonal = if Season::from_month(month).is_winter() {
            1.3
        } else {
            0.9
        };
        let trend = 1.0 - years_since_base(year) * PM25_YEARLY_TREND;
        PM25_BASE * seasonal * trend
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_ozone_base_year() {
            // 0.04 ppm * 1.3 * 1960
            assert!((ozone_for_missing_year(2014, 7) - 101.92).abs() < 1e-9);
            // 0.04 ppm * 0.8 * 1960
            assert!((ozone_for_missing_year(2014, 1) - 62.72).abs() < 1e-9);
            // shoulder months use the non-summer factor
            assert_eq!(ozone_for_missing_year(2014, 4), ozone_for_missing_year(2014, 1));
        }

        #[test]
        fn test_ozone_trend_increases() {
            let mut previous = ozone_for_missing_year(2014, 6);
            for year in 2015..=2024 {
                let current = ozone_for_missing_year(year, 6);
                assert!(current > previous, "{year} should exceed the year before");
                previous = current;
            }
            let expected = 0.04 * 1.3 * (1.0 + 4.0 * 0.002) * 1960.0;
            assert!((ozone_for_missing_year(2018, 6) - expected).abs() < 1e-9);
        }

        #[test]
        fn test_pm25_trend_decreases() {
            assert!((pm25_for_missing_year(2014, 12) - 9.1).abs() < 1e-9);
            assert!((pm25_for_missing_year(2014, 5) - 6.3).abs() < 1e-9);
            let expected = 7.0 * 0.9 * (1.0 - 10.0 * 0.01);
            assert!((pm25_for_missing_year(2024, 8) - expected).abs() < 1e-9);
            assert!(pm25_for_missing_year(2020, 1) < pm25_for_missing_year(2019, 1));
        }

        #[test]
        fn test_interpolation_is_deterministic() {
            for month in 1..=12 {
                assert_eq!(
                    ozone_for_missing_year(2019, month),
                    ozone_for_missing_year(2019, month)
                );
                assert_eq!(
                    pm25_for_missing_year(2019, month),
                    pm25_for_missing_year(2019, month)
                );
            }
        }
    }
}
