use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INVALID_RECORD: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score an organization from a JSON file of Form 990 financials
    Score {
        /// Path to the financial data file (JSON format)
        input: PathBuf,

        /// Print the result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the effective component weights as YAML
    Weights,
}

#[derive(Parser, Debug)]
#[command(name = "aem")]
#[command(about = "Altruistic Effectiveness Metric for nonprofit financials", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/aem/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to a weights file; overrides weights from the config file
    #[arg(short, long, global = true)]
    weights: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let config = match aem::config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let log_level = config
        .log_level
        .as_deref()
        .unwrap_or(aem::telemetry::DEFAULT_LOG_LEVEL);
    if let Err(e) = aem::telemetry::init(log_level, cli.verbose) {
        eprintln!("Config error: {}", e);
        std::process::exit(EXIT_CONFIG);
    }

    // Validate weights at startup
    let weights = match aem::config::effective_weights(&config, cli.weights.as_deref()) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    if let Err(errors) = aem::scoring::validate_weights(&weights) {
        eprintln!("Weight config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }
    for warning in aem::scoring::weight_warnings(&weights) {
        warn!("{}", warning);
    }

    match cli.command {
        Commands::Score { input, json } => {
            let raw = match aem::input::load_financials(&input) {
                Ok(raw) => raw,
                Err(e) => {
                    eprintln!("Input error: {:#}", e);
                    std::process::exit(EXIT_IO);
                }
            };

            let record = match aem::record::validate(&raw) {
                Ok(record) => record,
                Err(e) => {
                    eprintln!("Invalid financial data in {}: {}", input.display(), e);
                    std::process::exit(EXIT_INVALID_RECORD);
                }
            };

            let result = aem::scoring::score(&record, &weights);
            info!(
                organization = record.display_name(),
                composite_score = result.composite_score,
                "scored organization"
            );

            let report = aem::output::ScoreReport::new(&record, &result);
            if json {
                match aem::output::format_json(&report) {
                    Ok(output) => println!("{}", output),
                    Err(e) => {
                        eprintln!("Output error: {:#}", e);
                        std::process::exit(EXIT_IO);
                    }
                }
            } else {
                let use_colors = aem::output::should_use_colors();
                println!("{}", aem::output::format_report(&report, use_colors));
            }
        }
        Commands::Weights => match aem::output::format_weights(&weights) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("Output error: {:#}", e);
                std::process::exit(EXIT_IO);
            }
        },
    }

    std::process::exit(EXIT_SUCCESS);
}
