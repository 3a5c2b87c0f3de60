use clap::{ArgAction, Parser};
use mochila_common::config::Config;

#[derive(Parser)]
#[command(name = "mochila")]
#[command(about = "A survival backpack inventory, driven from a text menu.")]
#[command(version)]
pub struct CommandLine {
    /// Do not print the banner on startup
    #[arg(long)]
    pub no_banner: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase diagnostic logging on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            no_color: self.no_color,
            verbosity: self.verbose,
        }
    }
}
