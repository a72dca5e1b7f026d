//! Curriculum Model Command-Line Tool
//!
//! Lists the model's tables, prints their synthesized documentation and DDL,
//! and checks that an SQLite store accepts the schema.

mod commands;
mod config;
mod error;
mod formatter;

use clap::Parser;
use config::{Args, Command};
use curriculum_core::CurriculumModel;
use error::CliError;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "curriculum_core=warn,curriculum_cli=info";

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<String, CliError> {
    let (config, command) = args.into_config();
    let formatter = formatter::create_formatter(config.format);
    let model = CurriculumModel::load_with(config.doc_options)?;

    match command {
        Command::Tables { namespace } => {
            commands::tables(&model, namespace.map(Into::into), &*formatter)
        }
        Command::Docs(docs) => commands::docs(&model, docs.entity.as_deref(), &*formatter),
        Command::Ddl => commands::ddl(&model, &*formatter),
        Command::Check { database } => commands::check(&model, database.as_deref(), &*formatter),
    }
}
