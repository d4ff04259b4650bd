mod cli;
mod error;

use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use serde_json::Value;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};
use tablekit::{OptionsResolver, ResolvedTableOptions, TableOptions};

use crate::cli::{Cli, Commands, LogArgs};
use crate::error::{CliError, Result};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let Cli { log, command } = Cli::parse();
    init_logging(&log)?;

    let mut resolver = OptionsResolver::new();
    match command {
        Commands::Resolve { file, compact } => {
            info!("resolving {}", file.display());
            let options: TableOptions<Value> = TableOptions::load(&file)?;
            print(&resolver.resolve(options), compact)
        }
        Commands::Defaults { compact } => print(&resolver.resolve(TableOptions::new()), compact),
    }
}

fn init_logging(args: &LogArgs) -> Result<()> {
    match &args.log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::LogFile {
                path: path.clone(),
                source,
            })?;
            WriteLogger::init(args.log_level, Config::default(), file)?;
        }
        None => TermLogger::init(
            args.log_level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )?,
    }
    Ok(())
}

fn print(resolved: &ResolvedTableOptions<Value>, compact: bool) -> Result<()> {
    let json = resolved.to_json()?;
    let text = if compact {
        serde_json::to_string(&json)?
    } else {
        serde_json::to_string_pretty(&json)?
    };
    println!("{}", text);
    Ok(())
}
