mod context;
mod flags;
mod help;
mod parse;
mod prompts;
mod quiet;

use std::process::ExitCode;

pub use flags::CliFlags;
pub use parse::parse;

use context::{Context, Stop};

/// Run the CLI and map the outcome to an exit status.
pub fn run(args: Vec<String>) -> ExitCode {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(msg) => {
            prompts::error(&msg);
            prompts::usage_hint();
            return ExitCode::from(2);
        }
    };

    match ctx.run() {
        Ok(()) | Err(Stop::Done) => ExitCode::SUCCESS,
        Err(Stop::Failed(err)) => {
            prompts::error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}
