use clap::{Parser, Subcommand};
use lt_config::Config;
use lt_core::{get_time, telemetry, Result};
use lt_json::{abridge_with, format_json};
use lt_proc::{ProcessTable, SystemProcessTable};
use lt_text::{
    format_header_with, format_tokens, make_header_with, plural_with, squeeze,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

/// Formatting and process helpers for test harnesses
#[derive(Debug, Parser)]
#[command(name = "lthelper", version, about)]
struct Cli {
    /// Configuration file to use instead of ./lthelper.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a section header
    Header {
        text: String,
        #[arg(long, default_value = "debug")]
        level: String,
        /// Fail on levels without a header style instead of echoing the text
        #[arg(long)]
        strict: bool,
    },
    /// Shorten text to a maximum length
    Squeeze {
        text: String,
        max_len: usize,
        #[arg(long, default_value_t = 0)]
        tail: usize,
    },
    /// Shorten long strings in a JSON document (file or stdin)
    Abridge { file: Option<PathBuf> },
    /// Pretty-print a JSON document (file or stdin)
    FormatJson {
        file: Option<PathBuf>,
        #[arg(long)]
        no_trim: bool,
    },
    /// Print the current time
    Time {
        #[arg(long)]
        no_date: bool,
        #[arg(long)]
        precision: Option<u32>,
        #[arg(long)]
        local: bool,
        #[arg(long)]
        zone: bool,
    },
    /// Format a token amount
    Tokens {
        amount: f64,
        #[arg(long)]
        digits: Option<usize>,
        #[arg(long)]
        symbol: Option<String>,
    },
    /// Print the command line of a process
    Cmd { pid: u32 },
    /// Print PIDs whose command line matches a pattern
    Pids { pattern: String },
    /// Send SIGTERM to a process
    Terminate { pid: u32 },
}

fn main() {
    let env = std::env::var("LTHELPER_ENV").unwrap_or_else(|_| "development".to_string());
    telemetry::init_tracing(&env, "lthelper");

    let cli = Cli::parse();

    let config = match Config::load_from(cli.config.as_deref()) {
        Ok(config) => {
            tracing::debug!(?config, "Configuration loaded successfully");
            config
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    match run(cli.command, &config, &SystemProcessTable) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            tracing::error!("{}", e);
            process::exit(1);
        }
    }
}

fn run(command: Command, config: &Config, table: &dyn ProcessTable) -> Result<String> {
    let output = match command {
        Command::Header {
            text,
            level,
            strict,
        } => {
            let layout = config.header_layout();
            if strict {
                format_header_with(&text, &level, &layout)?
            } else {
                make_header_with(&text, &level, &layout)
            }
        }
        Command::Squeeze {
            text,
            max_len,
            tail,
        } => squeeze(&text, max_len, tail)?.into_owned(),
        Command::Abridge { file } => {
            let data: serde_json::Value = serde_json::from_str(&read_input(file.as_deref())?)?;
            let short = abridge_with(&data, &config.trim_options())?;
            serde_json::to_string_pretty(&short)?
        }
        Command::FormatJson { file, no_trim } => {
            let max_len = (!no_trim).then_some(config.trim.max_len);
            format_json(&read_input(file.as_deref())?, max_len)?
        }
        Command::Time {
            no_date,
            precision,
            local,
            zone,
        } => {
            let mut format = config.time_format();
            format.date &= !no_date;
            format.precision = precision.unwrap_or(format.precision);
            format.local_time |= local;
            format.time_zone |= zone;
            get_time(&format)
        }
        Command::Tokens {
            amount,
            digits,
            symbol,
        } => {
            let digits = digits.unwrap_or(config.tokens.digits);
            let symbol = symbol.unwrap_or_else(|| config.tokens.symbol.clone());
            format_tokens(amount, digits, &symbol)
        }
        Command::Cmd { pid } => table.command_by_pid(pid),
        Command::Pids { pattern } => {
            let pids = table.pids_by_pattern(&pattern);
            tracing::info!(
                "{} {} matched \"{}\"",
                pids.len(),
                plural_with("process", pids.len() as i64, "es"),
                pattern
            );
            pids.iter()
                .map(|pid| pid.to_string())
                .collect::<Vec<_>>()
                .join("\n")
        }
        Command::Terminate { pid } => {
            tracing::info!(pid, "Sending SIGTERM");
            table.terminate(pid);
            String::new()
        }
    };
    Ok(output)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    Ok(text)
}
