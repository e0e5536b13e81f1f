//! credenv: load, resolve and print deployment credentials.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use credenv::bootstrap::{default_filter, init_tracing};
use credenv::config::{load_local_overrides, resolve_profile, LoaderConfig, Profile, SystemEnv};
use credenv::emit::{emit, Format, Redaction};
use std::path::PathBuf;
use std::process::ExitCode;

/// Resolve object storage and database credentials from the environment
#[derive(Parser, Debug)]
#[command(name = "credenv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Deployment profile: credentials, object, database or all
    #[arg(short, long, value_parser = parse_profile)]
    profile: Option<Profile>,

    /// Override file merged into the environment
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Do not read any override file
    #[arg(long, conflicts_with = "env_file")]
    no_env_file: bool,

    /// Exit with an error if any key of the profile is unset
    #[arg(long)]
    strict: bool,

    /// Print secret values verbatim
    #[arg(long)]
    show_secrets: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for Format {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Text => Format::Text,
            OutputFormat::Json => Format::Json,
        }
    }
}

fn parse_profile(s: &str) -> Result<Profile, String> {
    s.parse().map_err(|e: credenv::ConfigError| e.to_string())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(default_filter(cli.verbose));

    let mut config = LoaderConfig::from_env();
    if let Some(profile) = cli.profile {
        config.profile = profile;
    }
    if let Some(path) = cli.env_file {
        config.env_file = path;
    }
    if cli.no_env_file {
        config.load_env_file = false;
    }
    config.strict |= cli.strict;

    if config.load_env_file {
        load_local_overrides(&config.env_file);
    }

    let values = resolve_profile(&SystemEnv, config.profile);
    let redaction = if cli.show_secrets {
        Redaction::Off
    } else {
        Redaction::Masked
    };

    let stdout = std::io::stdout();
    emit(&mut stdout.lock(), &values, redaction, cli.format.into())?;

    if config.strict {
        if let Err(e) = values.require_all() {
            eprintln!("error: {e}");
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}
