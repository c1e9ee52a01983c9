//! CSV options

/// Options for reading CSV files. The first record is always the header.
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
}

impl CsvReadOptions {
    /// A strict reader builder: header required, every row as wide as the header.
    pub(crate) fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .quote(self.quote)
            .has_headers(true)
            .flexible(false);
        builder
    }
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
        }
    }
}

/// Options for writing CSV files
#[derive(Debug, Clone)]
pub struct CsvWriteOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Write header row (default: true)
    pub write_header: bool,
    /// Line terminator (default: LF)
    pub line_terminator: LineTerminator,
}

impl CsvWriteOptions {
    /// A writer builder that never quotes on its own; the caller decides per column.
    pub(crate) fn writer_builder(&self) -> csv::WriterBuilder {
        let terminator = match self.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
        };
        let mut builder = csv::WriterBuilder::new();
        builder
            .delimiter(self.delimiter)
            .quote(self.quote)
            .quote_style(csv::QuoteStyle::Never)
            .terminator(terminator);
        builder
    }

    /// Check if a bare field would be misread and has to be quoted anyway
    pub(crate) fn needs_quotes(&self, raw: &str) -> bool {
        raw.bytes()
            .any(|b| b == self.delimiter || b == self.quote || b == b'\n' || b == b'\r')
    }
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            write_header: true,
            line_terminator: LineTerminator::LF,
        }
    }
}

/// Line terminator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    /// Unix-style (LF)
    LF,
    /// Windows-style (CRLF)
    CRLF,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_quotes() {
        let options = CsvWriteOptions::default();
        assert!(options.needs_quotes("a,b"));
        assert!(options.needs_quotes("say \"hi\""));
        assert!(options.needs_quotes("two\nlines"));
        assert!(!options.needs_quotes("1.5"));
        assert!(!options.needs_quotes("  "));
    }
}
