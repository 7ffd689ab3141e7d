//! Delimited text tables for analysis results
//!
//! Plain-text report formats: a space-delimited `delta n(delta)` table for
//! box-counting series, and semicolon-delimited tables for box samples and
//! radial-density records. Writers take any `io::Write` sink; persistence
//! location is the caller's concern.

use crate::error::Result;
use crate::records::{BoxSample, RadialDensityRecord, ScaleSeries};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a box-counting series as a `delta n(delta)` table
pub fn write_scale_series<W: Write>(mut sink: W, series: &ScaleSeries) -> Result<()> {
    writeln!(sink, "delta n(delta)")?;
    for entry in series.iter() {
        writeln!(sink, "{} {}", fmt_measure(entry.delta), entry.count)?;
    }
    Ok(())
}

/// Write a box-counting series to a text file
pub fn write_scale_series_to_path<P: AsRef<Path>>(path: P, series: &ScaleSeries) -> Result<()> {
    write_scale_series(BufWriter::new(File::create(path)?), series)
}

/// Write moving box-counting samples as a semicolon-delimited table
pub fn write_box_samples<W: Write>(mut sink: W, samples: &[BoxSample]) -> Result<()> {
    writeln!(sink, "id;x;y;box_size;boxcount")?;
    for sample in samples {
        writeln!(
            sink,
            "{};{};{};{};{}",
            sample.window_id,
            fmt_measure(sample.center.0),
            fmt_measure(sample.center.1),
            fmt_measure(sample.box_size),
            sample.count
        )?;
    }
    Ok(())
}

/// Write moving box-counting samples to a text file
pub fn write_box_samples_to_path<P: AsRef<Path>>(path: P, samples: &[BoxSample]) -> Result<()> {
    write_box_samples(BufWriter::new(File::create(path)?), samples)
}

/// Write radial-density records as a semicolon-delimited table
pub fn write_radial_density<W: Write>(
    mut sink: W,
    records: &[RadialDensityRecord],
) -> Result<()> {
    writeln!(sink, "radius;radius_km;area;n_points;rad_dens")?;
    for record in records {
        writeln!(
            sink,
            "{};{};{};{};{}",
            fmt_measure(record.radius),
            fmt_measure(record.radius_km),
            fmt_measure(record.area),
            record.point_count,
            fmt_measure(record.density)
        )?;
    }
    Ok(())
}

/// Write radial-density records to a text file
pub fn write_radial_density_to_path<P: AsRef<Path>>(
    path: P,
    records: &[RadialDensityRecord],
) -> Result<()> {
    write_radial_density(BufWriter::new(File::create(path)?), records)
}

/// Render a measure compactly: whole numbers without a decimal point,
/// fractional values with up to six decimals, trailing zeros trimmed.
fn fmt_measure(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == value.trunc() && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let s = format!("{value:.6}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> ScaleSeries {
        let mut s = ScaleSeries::new();
        s.push(100.0, 1);
        s.push(50.0, 2);
        s.push(12.5, 4);
        s
    }

    #[test]
    fn test_scale_series_table() {
        let mut buf = Vec::new();
        write_scale_series(&mut buf, &series()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "delta n(delta)\n100 1\n50 2\n12.5 4\n");
    }

    #[test]
    fn test_box_samples_table() {
        let samples = vec![
            BoxSample {
                window_id: 1,
                center: (25.0, 75.0),
                box_size: 50.0,
                count: 1,
            },
            BoxSample {
                window_id: 1,
                center: (25.0, 75.0),
                box_size: 25.0,
                count: 3,
            },
        ];

        let mut buf = Vec::new();
        write_box_samples(&mut buf, &samples).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "id;x;y;box_size;boxcount\n1;25;75;50;1\n1;25;75;25;3\n"
        );
    }

    #[test]
    fn test_radial_density_table() {
        let records = vec![RadialDensityRecord::new(2000.0, 4_000_000.0, 12)];
        let mut buf = Vec::new();
        write_radial_density(&mut buf, &records).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "radius;radius_km;area;n_points;rad_dens\n2000;2;4000000;12;3\n"
        );
    }

    #[test]
    fn test_nan_density_renders() {
        let records = vec![RadialDensityRecord::new(100.0, 0.0, 0)];
        let mut buf = Vec::new();
        write_radial_density(&mut buf, &records).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains(";NaN\n"));
    }

    #[test]
    fn test_write_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boxcount.txt");
        write_scale_series_to_path(&path, &series()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("delta n(delta)\n"));
        assert_eq!(text.lines().count(), 4);
    }
}
