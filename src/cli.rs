use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "formbot")]
#[command(author, version, about = "Telegram bot that collects focus-group applications", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot with long polling (default)
    Run,

    /// Validate the environment and print the effective configuration
    CheckConfig,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
