// Copyright (c) 2026 Risk Wall. All rights reserved.

mod config;
mod consts;
mod data;
mod error;
mod logging;
mod session;
mod ui;

use crate::config::Config;
use crate::consts::ui_consts::SNAPSHOT_DEFAULT_WIDTH;
use crate::logging::LogSink;
use crate::session::{run_headless_mode, run_tui_mode};
use clap::{Parser, Subcommand};
use log::info;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Terminal dashboard of geopolitical and macro risk scenarios
struct Args {
    /// Path to a JSON config file. Defaults to ~/.risk-wall/config.json when present.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the interactive dashboard (default)
    Start {
        /// Disable background colors
        #[arg(long = "no-background", action = clap::ArgAction::SetTrue)]
        no_background: bool,
    },
    /// Print the dashboard once as plain text
    Snapshot {
        /// Width in columns
        #[arg(long, default_value_t = SNAPSHOT_DEFAULT_WIDTH)]
        width: u16,

        /// Height in rows; the full page when omitted
        #[arg(long)]
        height: Option<u16>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config = Config::resolve(args.config.as_deref())?;

    match args.command.unwrap_or(Command::Start {
        no_background: false,
    }) {
        Command::Start { no_background } => {
            let sink = match &config.log_file {
                Some(path) => LogSink::File(path.clone()),
                None => LogSink::Disabled,
            };
            logging::init(sink)?;
            info!("Starting interactive dashboard");
            run_tui_mode(&config, !no_background).map_err(Into::into)
        }
        Command::Snapshot { width, height } => {
            logging::init(LogSink::Stderr)?;
            run_headless_mode(&config, width, height).map_err(Into::into)
        }
    }
}
