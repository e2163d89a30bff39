use anyhow::Result;
use clap::Parser;
use germicule_graph::{data, output, translate_with, Config};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "germicule-graph",
    about = "Flatten germicule trees into renderable graphs"
)]
struct Cli {
    /// Path to input JSON file
    #[clap(long)]
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[clap(long)]
    output: Option<PathBuf>,

    /// Output shape: echart or d3
    #[clap(long, default_value = "echart")]
    backend: String,

    /// Base node size for the echart backend
    #[clap(long)]
    symbol_size: Option<f64>,

    /// Path to a JSON theme file
    #[clap(long)]
    theme: Option<PathBuf>,

    /// Include graph statistics in the output
    #[clap(long)]
    summary: bool,

    /// Pretty-print the output
    #[clap(long)]
    pretty: bool,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let config = Config::from_options(&args.backend, args.symbol_size, args.theme.as_deref())?;

    log::info!("Input: {}", args.input.display());

    // 1. Load germicules
    let meta = data::load_meta(&args.input)?;

    // 2. Translate
    let translation = translate_with(&config, &meta)?;

    // 3. Write results
    match &args.output {
        Some(path) => {
            let file = BufWriter::new(File::create(path)?);
            output::write_translation(file, &translation, args.summary, args.pretty)?;
            log::info!("Graph written to {}", path.display());
        }
        None => {
            output::write_translation(io::stdout().lock(), &translation, args.summary, args.pretty)?;
        }
    }

    Ok(())
}
