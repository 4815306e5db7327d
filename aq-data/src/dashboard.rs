//! The immutable data bundle backing every dashboard page.
//!
//! `AirQualityData::initialize` runs the synthesis once; afterwards every
//! accessor is a pure read, so the bundle can be shared freely (for
//! example behind an `Arc`) without locking.

use crate::filter::{available_months, filter_by_month_year, AvailableMonths, FilterQuery};
use crate::series::{DailySeries, LabeledSeries};
use crate::statistics::{yearly_statistics, YearlyStatistics};
use crate::synthesis::generate_daily_series;
use aq_epa::annual_stat::AnnualSummary;
use aq_epa::composition::CompositionData;
use aq_epa::date_range::DateRange;
use aq_epa::error::{AqError, Result};
use aq_epa::gas::Gas;
use aq_epa::pollutant::Pollutant;
use aq_epa::station::StationInfo;
use chrono::NaiveDate;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// What to generate. Defaults to the dashboard's 2014-2024 range with an
/// entropy-seeded generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Fixes the random source so the series is reproducible.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let range = DateRange::dashboard();
        GeneratorConfig {
            start: range.start(),
            end: range.end(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn seeded(seed: u64) -> GeneratorConfig {
        GeneratorConfig {
            seed: Some(seed),
            ..GeneratorConfig::default()
        }
    }

    /// The range to generate, rejecting one that runs backwards.
    pub fn validate(&self) -> Result<DateRange> {
        if self.start > self.end {
            return Err(AqError::InvalidDateRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(DateRange(self.start, self.end))
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Everything the dashboard displays, generated once.
#[derive(Debug, Clone)]
pub struct AirQualityData {
    annual_summary: AnnualSummary,
    series: DailySeries,
    time_series: LabeledSeries,
    station_info: StationInfo,
    gases: Vec<Gas>,
    composition: CompositionData,
}

impl AirQualityData {
    /// Generate the bundle from the embedded Fairhope data.
    pub fn initialize(config: &GeneratorConfig) -> Result<AirQualityData> {
        let range = config.validate()?;
        info!(
            "generating {} days of air quality data ({} to {}, seed {:?})",
            range.num_days(),
            config.start,
            config.end,
            config.seed
        );
        let mut rng = config.rng();
        Ok(AirQualityData::generate(AnnualSummary::fairhope(), range, &mut rng))
    }

    /// Generate the bundle from an arbitrary summary and random source.
    pub fn generate<R: Rng>(annual_summary: AnnualSummary, range: DateRange, rng: &mut R) -> AirQualityData {
        let series = DailySeries::new(generate_daily_series(&annual_summary, range, rng));
        let time_series = series.to_labeled_series();
        debug!("generated {} daily samples", series.len());
        AirQualityData {
            annual_summary,
            series,
            time_series,
            station_info: StationInfo::fairhope(),
            gases: Gas::gases_data(),
            composition: CompositionData::atmosphere(),
        }
    }

    /// The full series as the line chart consumes it.
    pub fn time_series_data(&self) -> &LabeledSeries {
        &self.time_series
    }

    pub fn daily_series(&self) -> &DailySeries {
        &self.series
    }

    pub fn get_filtered_data(&self, month: u32, year: i32) -> LabeledSeries {
        filter_by_month_year(&self.series, month, year)
    }

    pub fn get_filtered(&self, query: &FilterQuery) -> LabeledSeries {
        query.apply(&self.series)
    }

    pub fn get_available_months(&self) -> AvailableMonths {
        available_months(&self.series)
    }

    pub fn yearly_statistics(&self, pollutant: Pollutant) -> Vec<YearlyStatistics> {
        yearly_statistics(&self.series, pollutant)
    }

    pub fn composition_data(&self) -> &CompositionData {
        &self.composition
    }

    pub fn gases_data(&self) -> &[Gas] {
        &self.gases
    }

    pub fn station_info(&self) -> &StationInfo {
        &self.station_info
    }

    pub fn annual_summary(&self) -> &AnnualSummary {
        &self.annual_summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolation::{ozone_for_missing_year, pm25_for_missing_year};
    use chrono::Datelike;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.start, NaiveDate::from_ymd_opt(2014, 1, 1).unwrap());
        assert_eq!(config.end, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_backwards_range_rejected() {
        let config = GeneratorConfig {
            start: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
            end: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            seed: Some(1),
        };
        assert!(matches!(
            AirQualityData::initialize(&config),
            Err(AqError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_bundle_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AirQualityData>();
    }

    #[test]
    fn test_static_parts() {
        let config = GeneratorConfig {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            seed: Some(5),
        };
        let data = AirQualityData::initialize(&config).unwrap();
        assert_eq!(data.time_series_data().len(), 31);
        assert_eq!(data.gases_data().len(), 8);
        assert_eq!(data.composition_data().labels.len(), 5);
        assert_eq!(data.station_info().name, "Fairhope High School");
        assert_eq!(data.annual_summary().len(), 22);
    }

    fn seeded(seed: u64) -> AirQualityData {
        AirQualityData::initialize(&GeneratorConfig::seeded(seed)).unwrap()
    }

    fn mean_where<F>(series: &DailySeries, pollutant: Pollutant, pred: F) -> f64
    where
        F: Fn(&NaiveDate) -> bool,
    {
        let values: Vec<i64> = series
            .iter()
            .filter(|s| pred(&s.date))
            .map(|s| s.value(pollutant))
            .collect();
        values.iter().sum::<i64>() as f64 / values.len() as f64
    }

    fn in_months(year: i32, months: &'static [u32]) -> impl Fn(&NaiveDate) -> bool {
        move |d| d.year() == year && months.contains(&d.month())
    }

    #[test]
    fn test_full_range_is_contiguous() {
        let data = seeded(42);
        let series = data.daily_series();
        assert_eq!(series.len(), 4018);
        assert_eq!(series.first_date(), NaiveDate::from_ymd_opt(2014, 1, 1));
        assert_eq!(series.last_date(), NaiveDate::from_ymd_opt(2024, 12, 31));
        for pair in series.samples().windows(2) {
            assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
        let labeled = data.time_series_data();
        assert_eq!(labeled.labels.len(), 4018);
        assert_eq!(labeled.labels[0], "Jan 1, 2014");
        assert_eq!(labeled.labels[4017], "Dec 31, 2024");
        for dataset in &labeled.datasets {
            assert_eq!(dataset.data.len(), 4018);
        }
    }

    #[test]
    fn test_physical_bounds() {
        for seed in [1, 2, 3] {
            let data = seeded(seed);
            for sample in data.daily_series() {
                assert!(sample.no2 >= 10, "{sample:?}");
                assert!(sample.pm25 >= 1, "{sample:?}");
                // 0.02 ppm and 0.08 ppm after conversion and rounding
                assert!((39..=157).contains(&sample.ozone), "{sample:?}");
            }
        }
    }

    #[test]
    fn test_seasonal_ordering_for_known_years() {
        let data = seeded(7);
        let series = data.daily_series();
        const SUMMER: &[u32] = &[6, 7, 8];
        const WINTER: &[u32] = &[12, 1, 2];
        const SHOULDER: &[u32] = &[3, 4, 5, 9, 10, 11];

        let summer = mean_where(series, Pollutant::Ozone, in_months(2014, SUMMER));
        let shoulder = mean_where(series, Pollutant::Ozone, in_months(2014, SHOULDER));
        let winter = mean_where(series, Pollutant::Ozone, in_months(2014, WINTER));
        assert!(summer > shoulder && shoulder > winter, "{summer} {shoulder} {winter}");

        let winter = mean_where(series, Pollutant::Pm25, in_months(2023, WINTER));
        let shoulder = mean_where(series, Pollutant::Pm25, in_months(2023, SHOULDER));
        let summer = mean_where(series, Pollutant::Pm25, in_months(2023, SUMMER));
        assert!(winter > shoulder && shoulder > summer, "{winter} {shoulder} {summer}");
    }

    #[test]
    fn test_missing_years_follow_interpolation() {
        let a = seeded(11);
        let b = seeded(12);
        for (x, y) in a.daily_series().iter().zip(b.daily_series()) {
            let (year, month) = (x.date.year(), x.date.month());
            if (2018..=2021).contains(&year) {
                let ozone = ozone_for_missing_year(year, month).round() as i64;
                assert_eq!(x.ozone, ozone);
                assert_eq!(y.ozone, ozone);
            }
            if year <= 2016 || (2018..=2021).contains(&year) {
                let pm25 = pm25_for_missing_year(year, month).round() as i64;
                assert_eq!(x.pm25, pm25);
                assert_eq!(y.pm25, pm25);
            }
        }
    }

    #[test]
    fn test_filter_june_2024() {
        let data = seeded(3);
        let june = data.get_filtered_data(6, 2024);
        assert_eq!(june.labels.len(), 30);
        assert_eq!(june.labels[0], "Jun 1, 2024");
        assert_eq!(june.labels[29], "Jun 30, 2024");
        assert_eq!(june.datasets.len(), 3);
        for dataset in &june.datasets {
            assert_eq!(dataset.data.len(), june.labels.len());
        }
        let expected: Vec<i64> = data
            .daily_series()
            .iter()
            .filter(|s| s.date.year() == 2024 && s.date.month() == 6)
            .map(|s| s.ozone)
            .collect();
        assert_eq!(june.datasets[1].data, expected);
    }

    #[test]
    fn test_filter_outside_range_is_empty() {
        let data = seeded(3);
        assert!(data.get_filtered_data(6, 2030).is_empty());
        assert!(data.get_filtered_data(13, 2024).is_empty());
    }

    #[test]
    fn test_available_months_full_range() {
        let data = seeded(5);
        let available = data.get_available_months();
        assert_eq!(available.months, (1..=12).collect::<Vec<u32>>());
        assert_eq!(available.years, (2014..=2024).collect::<Vec<i32>>());
    }

    #[test]
    fn test_reads_are_idempotent() {
        let data = seeded(8);
        assert_eq!(data.get_available_months(), data.get_available_months());
        assert_eq!(data.get_filtered_data(12, 2024), data.get_filtered_data(12, 2024));
        assert_eq!(
            data.get_filtered(&FilterQuery::default()),
            data.get_filtered_data(12, 2024)
        );
    }

    #[test]
    fn test_seed_reproduces_series() {
        assert_eq!(seeded(21).daily_series(), seeded(21).daily_series());
        assert_ne!(seeded(21).daily_series(), seeded(22).daily_series());
    }

    #[test]
    fn test_yearly_statistics_track_annual_means() {
        let data = seeded(13);
        let stats = data.yearly_statistics(Pollutant::Pm25);
        assert_eq!(stats.len(), 11);
        let y2017 = stats.iter().find(|s| s.year == 2017).unwrap();
        // the seasonal/weekend shaping and rounding move the mean a little
        assert!((y2017.mean - 7.39).abs() < 1.5, "{}", y2017.mean);
        assert_eq!(y2017.days, 365);
    }
}
