use crate::error::{Error, Result};
use std::env;

pub const DEFAULT_OUTPUT_FILE: &str = "volleyball_efficiency_pivot.csv";
pub const DEFAULT_PREVIEW_ROWS: usize = 20;

#[derive(Debug, Clone)]
pub struct Config {
    pub output_path: String,
    pub preview_rows: usize,
    pub delimiter: u8,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let output_path = env::var("VOLLEYPIVOT_OUTPUT")
            .unwrap_or_else(|_| DEFAULT_OUTPUT_FILE.to_string());

        let preview_rows = match env::var("VOLLEYPIVOT_PREVIEW_ROWS") {
            Ok(v) => v.parse().map_err(|_| {
                Error::Config(format!("VOLLEYPIVOT_PREVIEW_ROWS is not a number: {}", v))
            })?,
            Err(_) => DEFAULT_PREVIEW_ROWS,
        };

        let delimiter = match env::var("VOLLEYPIVOT_DELIMITER") {
            Ok(v) => parse_delimiter(&v)?,
            Err(_) => b',',
        };

        Ok(Self {
            output_path,
            preview_rows,
            delimiter,
        })
    }
}

pub fn parse_delimiter(value: &str) -> Result<u8> {
    let bytes = value.as_bytes();
    if bytes.len() != 1 {
        return Err(Error::Config(format!(
            "Delimiter must be a single byte, got {:?}",
            value
        )));
    }
    Ok(bytes[0])
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub show_progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { show_progress: true }
    }
}
