use icon_updater::cli::{self, Flags};
use std::process::ExitCode;

fn main() -> ExitCode {
    let flags = Flags::from_args(pico_args::Arguments::from_env());

    match cli::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => cli::report(&err),
    }
}
