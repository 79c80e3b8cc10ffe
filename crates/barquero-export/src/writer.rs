//! Path-level export.

use barquero_types::{BarqueroError, Candle, Result};
use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::Path;

use crate::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};

/// Writes a candle series to `path` in the given format.
///
/// The target file is created or truncated unconditionally; re-running a
/// download overwrites the previous artifact rather than appending to it.
///
/// # Errors
///
/// Any I/O or serialization failure surfaces as
/// [`BarqueroError::Export`] carrying the path and the underlying cause.
pub fn export_candles(candles: &[Candle], path: &Path, format: OutputFormat) -> Result<()> {
    let file = File::create(path).map_err(|e| export_error(path, e))?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Csv => CsvFormatter::new().write_candles(candles, &mut writer),
        OutputFormat::Tsv => CsvFormatter::tsv().write_candles(candles, &mut writer),
        OutputFormat::Json => JsonFormatter::new().write_candles(candles, &mut writer),
        OutputFormat::Ndjson => JsonFormatter::ndjson().write_candles(candles, &mut writer),
    }
    .map_err(|e| export_error(path, e))?;

    writer.flush().map_err(|e| export_error(path, e))
}

fn export_error(path: &Path, err: impl std::fmt::Display) -> BarqueroError {
    BarqueroError::Export {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_candles() -> Vec<Candle> {
        (1..=3)
            .map(|day| {
                let open_time = NaiveDate::from_ymd_opt(2025, 1, day)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap();
                Candle::new(
                    open_time,
                    Some(100.0 + f64::from(day)),
                    Some(101.0),
                    Some(99.0),
                    Some(100.5),
                    Some(1000.0),
                )
            })
            .collect()
    }

    #[test]
    fn test_export_csv() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("btcusdt_ohlcv_2025.csv");
        let candles = create_test_candles();

        export_candles(&candles, &path, OutputFormat::Csv).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Open Time,Open,High,Low,Close,Volume");
    }

    #[test]
    fn test_export_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let candles = create_test_candles();

        export_candles(&candles, &path, OutputFormat::Csv).unwrap();
        let first = std::fs::read(&path).unwrap();

        export_candles(&candles, &path, OutputFormat::Csv).unwrap();
        let second = std::fs::read(&path).unwrap();

        // Overwrite, not append: identical input yields identical bytes.
        assert_eq!(first, second);
    }

    #[test]
    fn test_export_error_carries_path() {
        let candles = create_test_candles();
        let path = Path::new("/nonexistent-dir/out.csv");

        let err = export_candles(&candles, path, OutputFormat::Csv).unwrap_err();
        assert!(matches!(
            err,
            BarqueroError::Export { path: ref p, .. } if p == Path::new("/nonexistent-dir/out.csv")
        ));
    }

    #[test]
    fn test_export_ndjson() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.ndjson");

        export_candles(&create_test_candles(), &path, OutputFormat::Ndjson).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
    }
}
