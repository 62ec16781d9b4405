pub mod config;
pub mod error;
pub mod models;
pub mod intake;
pub mod analysis;
pub mod export;

pub use config::{Config, PipelineConfig};
pub use error::{Error, Result};
pub use intake::CsvIntake;
pub use analysis::{DerivePipeline, EfficiencyEngine};
