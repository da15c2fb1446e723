use std::process::ExitCode;

use clap::Parser;
use loxc_drv::{run, Cli};

fn main() -> ExitCode {
    run(Cli::parse())
}
