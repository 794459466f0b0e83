mod api;
mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod export;
mod utils;

use clap::Parser;

use cli::{Cli, TerminalPrompter};
use config::Config;
use utils::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.debug);

    let config = Config::load();
    let cli = cli.with_config(&config);

    if let Err(e) = app::run(&cli, &mut TerminalPrompter) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
