use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Result;
use crate::models::{ColumnLayout, EventRow};

/// Reader-side options for delimited match exports.
#[derive(Debug, Clone)]
pub struct IntakeOptions {
    pub delimiter: u8,
}

impl Default for IntakeOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Parses an uploaded match log into the row set consumed by the deriver.
/// Input must be tabular with a header row carrying at least `skill` and
/// `evaluation_code`; anything else is rejected before derivation starts.
pub struct CsvIntake {
    options: IntakeOptions,
}

impl CsvIntake {
    pub fn new(options: IntakeOptions) -> Self {
        Self { options }
    }

    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<(ColumnLayout, Vec<EventRow>)> {
        let file = File::open(path.as_ref())?;
        self.load_reader(BufReader::new(file))
    }

    pub fn load_str(&self, content: &str) -> Result<(ColumnLayout, Vec<EventRow>)> {
        self.load_reader(content.as_bytes())
    }

    pub fn load_reader<R: Read>(&self, reader: R) -> Result<(ColumnLayout, Vec<EventRow>)> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.options.delimiter)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let layout = ColumnLayout::from_headers(headers.iter())?;

        let mut events = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            let fields: Vec<&str> = record.iter().collect();
            events.push(layout.project(&fields));
        }

        tracing::info!(
            "Read {} event rows ({} of {} input columns retained)",
            events.len(),
            layout.columns().len(),
            headers.len()
        );

        Ok((layout, events))
    }
}
