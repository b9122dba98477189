mod context;
mod flags;
pub mod prompts;
pub mod quiet;

use std::process::ExitCode;

pub use context::Context;
pub use flags::CliFlags;

/// Run non-interactive mode.
pub fn run(flags: CliFlags) -> ExitCode {
    let mut ctx = Context::new(flags);
    match ctx.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
