mod commands;
mod terminal;

use std::io;

use commands::CommandLine;
use mochila_core::Session;
use terminal::{logging, print};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(&cfg);
    if cfg.no_color {
        colored::control::set_override(false);
    }
    debug!(?cfg, "starting session");

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    if !cfg.no_banner {
        print::banner(&mut stdout)?;
    }

    let mut session = Session::new(stdin, stdout);
    session.run()
}
