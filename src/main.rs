use structopt::StructOpt;

use crate::cli::commands::Command;
use crate::cli::Minichess;

mod cli;

fn main() {
    // Move notices (captures, relocations, rejections) are emitted through
    // `log`; surface them by default, RUST_LOG still overrides.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    Minichess::from_args().execute();
}
