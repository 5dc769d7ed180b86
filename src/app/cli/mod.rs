//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api::{self, GenerateOptions};
use crate::app::logging;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "leadmail")]
#[command(version)]
#[command(
    about = "Draft personalized, critic-reviewed outreach emails for a CSV of leads",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an email for every row of a leads CSV
    #[clap(visible_alias = "g")]
    Generate {
        /// Leads CSV with a `name` column
        input: PathBuf,
        /// Where to write the augmented CSV (default: leads_with_emails.csv next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Optional TOML file with service endpoints and timeouts
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Check the model artifact, completion server, and lookup credential
    Doctor {
        /// Optional TOML file with service endpoints and timeouts
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Generate { input, output, config } => {
            run_generate(input, output, config).map(|_| 0)
        }
        Commands::Doctor { config } => run_doctor(config),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_generate(
    input: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<(), AppError> {
    let result = api::generate(GenerateOptions { input, output }, config.as_deref())?;
    let report = &result.report;

    println!(
        "✅ Generated {} email(s) ({} redrafted, {} failed)",
        report.len() - report.failed_count(),
        report.redrafted_count(),
        report.failed_count()
    );
    println!("📥 Results written to {}", result.output_path.display());
    Ok(())
}

fn run_doctor(config: Option<PathBuf>) -> Result<i32, AppError> {
    let outcome = api::doctor(config.as_deref())?;
    outcome.diagnostics.emit();

    println!("Start the completion server with: llama-server {}", outcome.server_args.join(" "));
    if outcome.exit_code == 0 {
        println!("✅ Ready to generate");
    }
    Ok(outcome.exit_code)
}
