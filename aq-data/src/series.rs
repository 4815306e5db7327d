//! The generated daily series and the labeled shape the charts consume.

use aq_epa::pollutant::Pollutant;
use aq_utils::dates::format_label;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Smoothing factor the line chart applies to every dataset.
pub const LINE_TENSION: f64 = 0.4;

/// One calendar day of synthesized readings, all in whole µg/m³.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySample {
    pub date: NaiveDate,
    pub no2: i64,
    pub ozone: i64,
    pub pm25: i64,
}

impl DailySample {
    pub fn value(&self, pollutant: Pollutant) -> i64 {
        match pollutant {
            Pollutant::No2 => self.no2,
            Pollutant::Ozone => self.ozone,
            Pollutant::Pm25 => self.pm25,
        }
    }
}

/// The full generated sequence: one sample per day, strictly ascending by
/// date. Read-only once built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailySeries(Vec<DailySample>);

impl DailySeries {
    /// Wrap samples, sorting them by date and dropping repeated dates so the
    /// ordering invariant holds whatever the caller passed in.
    pub fn new(mut samples: Vec<DailySample>) -> DailySeries {
        if !samples.is_sorted_by_key(|s| s.date) {
            samples.sort_by_key(|s| s.date);
        }
        samples.dedup_by_key(|s| s.date);
        DailySeries(samples)
    }

    pub fn samples(&self) -> &[DailySample] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailySample> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.0.first().map(|s| s.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.0.last().map(|s| s.date)
    }

    /// The whole series in chart form.
    pub fn to_labeled_series(&self) -> LabeledSeries {
        LabeledSeries::from_samples(self.iter())
    }
}

impl<'a> IntoIterator for &'a DailySeries {
    type Item = &'a DailySample;
    type IntoIter = std::slice::Iter<'a, DailySample>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One named line of a labeled series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<i64>,
    pub border_color: String,
    pub background_color: String,
    pub tension: f64,
}

impl Dataset {
    pub fn for_pollutant(pollutant: Pollutant, data: Vec<i64>) -> Dataset {
        Dataset {
            label: pollutant.label().to_string(),
            data,
            border_color: pollutant.border_color().to_string(),
            background_color: pollutant.background_color().to_string(),
            tension: LINE_TENSION,
        }
    }
}

/// Axis labels plus one dataset per pollutant, aligned by index.
///
/// Datasets always come in [`Pollutant::ALL`] order (NO₂, ozone, PM2.5),
/// even when there are no labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl LabeledSeries {
    pub fn from_samples<'a, I>(samples: I) -> LabeledSeries
    where
        I: IntoIterator<Item = &'a DailySample>,
    {
        let mut labels = Vec::new();
        let mut columns: [Vec<i64>; 3] = Default::default();
        for sample in samples {
            labels.push(format_label(&sample.date));
            for (column, pollutant) in columns.iter_mut().zip(Pollutant::ALL) {
                column.push(sample.value(pollutant));
            }
        }
        let datasets = Pollutant::ALL
            .into_iter()
            .zip(columns)
            .map(|(pollutant, data)| Dataset::for_pollutant(pollutant, data))
            .collect();
        LabeledSeries { labels, datasets }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn dataset(&self, pollutant: Pollutant) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.label == pollutant.label())
    }
}
