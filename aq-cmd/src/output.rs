//! Where command output goes and how it is encoded.

use aq_data::{DailySeries, LabeledSeries};
use aq_epa::pollutant::Pollutant;
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Stdout, or a freshly created file when a path is given.
pub fn open_output(path: Option<&str>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            info!("writing output to {path}");
            Ok(Box::new(BufWriter::new(File::create(path)?)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Pretty-printed JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// One CSV row per serializable record, with a header from the field names.
pub fn write_csv_records<W, I, T>(writer: W, records: I) -> anyhow::Result<()>
where
    W: Write,
    I: IntoIterator<Item = T>,
    T: Serialize,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// `date,no2,ozone,pm25` with ISO dates.
pub fn write_series_csv<W: Write>(writer: W, series: &DailySeries) -> anyhow::Result<()> {
    write_csv_records(writer, series.iter())
}

/// `label,no2,ozone,pm25` with chart labels as the first column.
pub fn write_labeled_csv<W: Write>(writer: W, labeled: &LabeledSeries) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut header = vec!["label".to_string()];
    header.extend(Pollutant::ALL.iter().map(|p| p.key().to_string()));
    wtr.write_record(&header)?;
    for (i, label) in labeled.labels.iter().enumerate() {
        let mut row = vec![label.clone()];
        for dataset in &labeled.datasets {
            row.push(dataset.data.get(i).map(|v| v.to_string()).unwrap_or_default());
        }
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}
