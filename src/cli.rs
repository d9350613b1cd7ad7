use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "tma-settings",
    about = "Settings Mini App running in a terminal web view emulator"
)]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Host launch parameters (url-encoded initData); overrides the config file
    #[arg(long, global = true)]
    pub init_data: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Open the settings page in the emulator
    Run,
    /// Print the user summary and theme the page would show, then exit
    Preview,
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}
