use std::env;
use std::process::ExitCode;

use clap::Parser;

mod cli;
mod clipboard;
mod error;
mod exits;
mod logging;
mod pass;
mod settings;
mod terminal;
mod tui;

use cli::CliFlags;

fn main() -> ExitCode {
    exits::install_handlers();
    exits::disable_core_dumps();

    let bare = env::args_os().len() == 1;
    let flags = CliFlags::parse();

    if flags.interactive || (bare && cli::quiet::is_interactive()) {
        tui::run()
    } else {
        logging::init_stderr();
        cli::run(flags)
    }
}
