//! weft-check - validate Weft configuration files
//!
//! Loads a Weft config, reports schema violations, and prints the
//! resolved document with defaults applied.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use weft_cli::output::{field_row, format_count, print_config_error, Status};
use weft_core::config::Config;
use weft_core::error::{exit_codes, Error, ErrorCode};

#[derive(Parser)]
#[command(name = "weft-check")]
#[command(about = "Validate Weft configuration files")]
#[command(version)]
struct Cli {
    /// Path to the configuration file (searches standard names when omitted)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Reject unrecognized top-level keys
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration and report violations
    Check,

    /// Print the resolved configuration with defaults applied
    Show {
        /// Emit the resolved document as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check => run_check(cli.config.as_deref(), cli.strict),
        Commands::Show { json } => run_show(cli.config.as_deref(), cli.strict, json),
    };

    std::process::exit(result);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();
}

fn load(path: Option<&str>, strict: bool) -> weft_core::Result<Config> {
    if strict {
        Config::load_strict(path)
    } else {
        Config::load(path)
    }
}

fn run_check(path: Option<&str>, strict: bool) -> i32 {
    match load(path, strict) {
        Ok(config) => {
            for warning in config.document.content_warnings() {
                Status::warning(&warning);
            }
            Status::success(&format!(
                "{} is valid ({}, {})",
                config.path.display(),
                format_count(config.document.content.len(), "content pattern", "content patterns"),
                format_count(config.document.plugins.len(), "plugin", "plugins"),
            ));
            exit_codes::SUCCESS
        }
        Err(e) => {
            print_config_error(&e);
            error_exit_code(&e)
        }
    }
}

fn run_show(path: Option<&str>, strict: bool, json: bool) -> i32 {
    let config = match load(path, strict) {
        Ok(config) => config,
        Err(e) => {
            print_config_error(&e);
            return error_exit_code(&e);
        }
    };

    if json {
        match serde_json::to_string_pretty(&config.document) {
            Ok(body) => {
                println!("{}", body);
                exit_codes::SUCCESS
            }
            Err(e) => {
                Status::error(&format!("Failed to serialize document: {}", e));
                exit_codes::FAILURE
            }
        }
    } else {
        let doc = &config.document;
        Status::header(&format!("Weft configuration ({})", config.path.display()));
        field_row("content", &doc.content.join(", "));
        field_row("darkMode", &doc.dark_mode.to_string());
        field_row(
            "theme",
            &format_count(doc.theme.extend.len(), "extension", "extensions"),
        );
        if doc.plugins.is_empty() {
            field_row("plugins", "none");
        } else {
            let refs: Vec<&str> = doc.plugins.iter().map(|p| p.as_str()).collect();
            field_row("plugins", &refs.join(", "));
        }
        exit_codes::SUCCESS
    }
}

/// Map an error to the process exit code
fn error_exit_code(error: &Error) -> i32 {
    match error.code {
        ErrorCode::SchemaViolation | ErrorCode::EmptyContentSet | ErrorCode::UnknownField => {
            exit_codes::SCHEMA_ERROR
        }
        ErrorCode::ConfigError | ErrorCode::ConfigNotFound | ErrorCode::ConfigParseError => {
            exit_codes::CONFIG_ERROR
        }
        _ => exit_codes::FAILURE,
    }
}
