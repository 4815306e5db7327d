//! Daily value synthesis from annual means.
//!
//! For a year the monitor reported, a pollutant's daily value is its
//! annual mean shaped by a seasonal and a weekday multiplier, then jittered
//! by a bounded symmetric random amount. Years without data fall back to
//! [`crate::interpolation`]. NO₂ has no annual data at all and is built
//! from a per-season base level shaped by its weekday profile.

use crate::interpolation::{ozone_for_missing_year, pm25_for_missing_year};
use crate::series::DailySample;
use aq_epa::annual_stat::AnnualSummary;
use aq_epa::date_range::DateRange;
use aq_epa::pollutant::{ozone_ppm_to_ugm3, Pollutant};
use aq_epa::season::Season;
use aq_utils::dates::is_weekend;
use chrono::{Datelike, NaiveDate};
use rand::Rng;

/// Ozone is clamped to this band (ppm) before unit conversion.
pub const OZONE_MIN_PPM: f64 = 0.02;
pub const OZONE_MAX_PPM: f64 = 0.08;
/// Floor for stored PM2.5 values, µg/m³.
pub const PM25_FLOOR: i64 = 1;
/// Floor for stored NO₂ values, µg/m³.
pub const NO2_FLOOR: i64 = 10;

/// Multipliers that shape a base level into a daily expectation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    pub winter: f64,
    pub summer: f64,
    pub shoulder: f64,
    pub weekend: f64,
    pub weekday: f64,
    /// Half-width of the uniform jitter, as a fraction of the expectation.
    pub jitter: f64,
}

/// Photochemical: peaks in summer, lower at weekends.
pub const OZONE_PROFILE: Profile = Profile {
    winter: 0.7,
    summer: 1.3,
    shoulder: 1.0,
    weekend: 0.9,
    weekday: 1.0,
    jitter: 0.3,
};

/// Heating driven: peaks in winter, lower at weekends.
pub const PM25_PROFILE: Profile = Profile {
    winter: 1.4,
    summer: 0.8,
    shoulder: 1.0,
    weekend: 0.85,
    weekday: 1.0,
    jitter: 0.4,
};

/// Traffic driven: the season sets the base level (see [`no2_base`]) and
/// weekdays are boosted rather than weekends cut.
pub const NO2_PROFILE: Profile = Profile {
    winter: 1.0,
    summer: 1.0,
    shoulder: 1.0,
    weekend: 0.75,
    weekday: 1.1,
    jitter: 0.3,
};

/// NO₂ base level in µg/m³ for a season. NO₂ has no annual summary, so
/// this stands in for the annual mean.
pub fn no2_base(season: Season) -> f64 {
    match season {
        Season::Winter => 35.0,
        Season::Summer => 25.0,
        Season::Shoulder => 30.0,
    }
}

impl Profile {
    pub fn seasonal(&self, season: Season) -> f64 {
        match season {
            Season::Winter => self.winter,
            Season::Summer => self.summer,
            Season::Shoulder => self.shoulder,
        }
    }

    pub fn weekly(&self, weekend: bool) -> f64 {
        if weekend {
            self.weekend
        } else {
            self.weekday
        }
    }

    /// The jitter-free value for a day: `base × seasonal × weekly`.
    pub fn expected(&self, base: f64, date: &NaiveDate) -> f64 {
        base * self.seasonal(Season::of(date)) * self.weekly(is_weekend(date))
    }

    /// `expected` plus a uniform draw from `[-r, r)` where `r = expected × jitter`.
    pub fn sample<R: Rng>(&self, base: f64, date: &NaiveDate, rng: &mut R) -> f64 {
        let expected = self.expected(base, date);
        expected + jitter(expected * self.jitter, rng)
    }
}

/// Uniform draw from `[-spread, spread)`. A non-positive spread adds nothing
/// and consumes no randomness.
pub fn jitter<R: Rng>(spread: f64, rng: &mut R) -> f64 {
    if spread > 0.0 {
        rng.random_range(0.0..(spread * 2.0)) - spread
    } else {
        0.0
    }
}

/// Ozone for a day of a reported year, in whole µg/m³.
pub fn ozone_from_mean<R: Rng>(mean_ppm: f64, date: &NaiveDate, rng: &mut R) -> i64 {
    let ppm = OZONE_PROFILE
        .sample(mean_ppm, date, rng)
        .clamp(OZONE_MIN_PPM, OZONE_MAX_PPM);
    ozone_ppm_to_ugm3(ppm).round() as i64
}

/// PM2.5 for a day of a reported year, in whole µg/m³.
pub fn pm25_from_mean<R: Rng>(mean: f64, date: &NaiveDate, rng: &mut R) -> i64 {
    let value = PM25_PROFILE.sample(mean, date, rng);
    (value.round() as i64).max(PM25_FLOOR)
}

/// NO₂ for any day, in whole µg/m³.
pub fn no2_for_day<R: Rng>(date: &NaiveDate, rng: &mut R) -> i64 {
    let value = NO2_PROFILE.sample(no2_base(Season::of(date)), date, rng);
    (value.round() as i64).max(NO2_FLOOR)
}

/// Synthesize one day. Randomness is drawn in a fixed order (ozone, PM2.5,
/// NO₂), skipping pollutants whose value comes from interpolation.
pub fn synthesize_day<R: Rng>(summary: &AnnualSummary, date: NaiveDate, rng: &mut R) -> DailySample {
    let year = date.year();
    let month = date.month();

    let ozone = match summary.known_mean(Pollutant::Ozone, year) {
        Some(mean) => ozone_from_mean(mean, &date, rng),
        None => ozone_for_missing_year(year, month).round() as i64,
    };
    let pm25 = match summary.known_mean(Pollutant::Pm25, year) {
        Some(mean) => pm25_from_mean(mean, &date, rng),
        None => pm25_for_missing_year(year, month).round() as i64,
    };
    let no2 = no2_for_day(&date, rng);

    DailySample {
        date,
        no2,
        ozone,
        pm25,
    }
}

/// Generate one sample per calendar day in `range`, in date order.
///
/// The output depends only on the summary, the range and the state of
/// `rng`: a seeded generator reproduces the same series.
pub fn generate_daily_series<R: Rng>(
    summary: &AnnualSummary,
    range: DateRange,
    rng: &mut R,
) -> Vec<DailySample> {
    let mut samples = Vec::with_capacity(range.num_days());
    for date in range {
        samples.push(synthesize_day(summary, date, rng));
    }
    samples
}
