use clap::Parser;
use tracing_subscriber::EnvFilter;

use volleypivot::config::parse_delimiter;
use volleypivot::export::{render_preview, save_csv, to_json};
use volleypivot::intake::IntakeOptions;
use volleypivot::models::DerivedTable;
use volleypivot::{Config, CsvIntake, DerivePipeline, EfficiencyEngine, PipelineConfig};

#[derive(Parser, Debug)]
#[command(name = "volleypivot")]
#[command(version = "0.1.0")]
#[command(about = "Derive pivot-ready efficiency values from volleyball match event logs")]
struct Args {
    /// Path to the raw match CSV file
    input: String,

    /// Output file (defaults to volleyball_efficiency_pivot.csv)
    #[arg(short, long)]
    output: Option<String>,

    /// Output format (csv, json)
    #[arg(short, long, default_value = "csv")]
    format: String,

    /// Number of rows to preview
    #[arg(long)]
    preview_rows: Option<usize>,

    /// Skip the preview
    #[arg(long)]
    no_preview: bool,

    /// Field delimiter for input and output
    #[arg(long)]
    delimiter: Option<String>,

    /// Suppress the progress bar
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("volleypivot=info".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let config = Config::from_env()?;

    let delimiter = match args.delimiter {
        Some(ref value) => parse_delimiter(value)?,
        None => config.delimiter,
    };

    // Read and validate the match log
    let intake = CsvIntake::new(IntakeOptions { delimiter });
    tracing::info!("Reading match log: {}", args.input);
    let (layout, events) = match intake.load_path(&args.input) {
        Ok(parsed) => parsed,
        Err(e) if e.is_input_error() => {
            anyhow::bail!("unable to process {}: {}", args.input, e)
        }
        Err(e) => return Err(e.into()),
    };

    // Derive efficiency values
    let pipeline = DerivePipeline::new(
        EfficiencyEngine::new(),
        PipelineConfig {
            show_progress: !args.quiet,
        },
    );
    let table = pipeline.run(layout, events);

    // Preview
    if !args.no_preview {
        let limit = args.preview_rows.unwrap_or(config.preview_rows);
        println!("{}", render_preview(&table, limit));
    }

    // Write output
    let output_path = args.output.unwrap_or(config.output_path);
    write_output(&table, &output_path, &args.format, delimiter)?;
    tracing::info!("Output written to: {}", output_path);

    Ok(())
}

fn write_output(
    table: &DerivedTable,
    path: &str,
    format: &str,
    delimiter: u8,
) -> anyhow::Result<()> {
    match format {
        "json" => std::fs::write(path, to_json(table)?)?,
        _ => save_csv(table, path, delimiter)?,
    }
    Ok(())
}
