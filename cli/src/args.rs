use std::path::PathBuf;

use clap::{Parser, Subcommand};
use warden_client_sdk::utils::logger::LogStyle;

#[derive(Parser)]
#[clap(name = "warden-bot")]
#[clap(about = "Daily activity bot for a single Warden account")]
pub struct Args {
    /// Question list JSON file, overrides QUESTIONS_PATH
    #[clap(long, global = true)]
    pub questions: Option<PathBuf>,

    /// `timestamp` or `symbol`, overrides LOG_STYLE
    #[clap(long, global = true)]
    pub log_style: Option<LogStyle>,

    #[clap(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Default, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Log in and run today's tasks
    #[default]
    Run,
    /// Print the wallet address derived from PRIVATE_KEY
    Address,
}
