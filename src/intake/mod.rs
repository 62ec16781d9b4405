pub mod reader;

pub use reader::{CsvIntake, IntakeOptions};
