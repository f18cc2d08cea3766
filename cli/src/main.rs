// SPDX-FileCopyrightText: 2023 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A command line tool for finding GPIO lines by name.

use clap::{ArgAction, Parser};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod common;
mod find;

fn main() -> ExitCode {
    match Cli::try_parse() {
        Ok(opt) => {
            init_logging(opt.verbose);
            return if find::cmd(&opt.find, opt.verbose > 0) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
        Err(e) => {
            if !e.use_stderr() {
                // --help and --version
                _ = e.print();
                return ExitCode::SUCCESS;
            }
            eprintln!("{e}")
        }
    }
    ExitCode::FAILURE
}

#[derive(Parser)]
#[command(
    name = "gpiofind",
    about = "A utility to find GPIO lines by name on Linux using GPIO character devices.",
    version
)]
struct Cli {
    /// Provide more detailed error messages and logging
    ///
    /// May be repeated for more detail.
    #[arg(short = 'v', long, action = ArgAction::Count, display_order = 800)]
    verbose: u8,

    #[command(flatten)]
    find: find::Opts,
}

// Logs go to stderr so they never mix with results.
//
// RUST_LOG, if set, overrides the level selected by --verbose.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gpiocdev_find={level},gpiofind={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
