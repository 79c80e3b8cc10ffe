//! Delimited text output format.

use barquero_types::Candle;
use std::io::Write;

use crate::{FormatError, Formatter};

/// Timestamp layout used in delimited output.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Delimited text formatter (CSV by default).
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include the header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_candles<W: Write + Send>(
        &self,
        candles: &[Candle],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "Open Time{d}Open{d}High{d}Low{d}Close{d}Volume")?;
        }

        for candle in candles {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                candle.open_time.format(TIMESTAMP_FORMAT),
                field(candle.open),
                field(candle.high),
                field(candle.low),
                field(candle.close),
                field(candle.volume),
            )?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}

/// Renders an optional numeric field; `None` becomes an empty field.
fn field(value: Option<f64>) -> String {
    value.map_or_else(String::new, |v| v.to_string())
}
