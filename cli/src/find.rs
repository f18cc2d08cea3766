// SPDX-FileCopyrightText: 2023 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::common::{self, emit_error, EmitOpts};
use anyhow::Result;
use clap::Parser;
use gpiocdev_find::discover::DEV_DIR;
use gpiocdev_find::{Cdev, Found, Resolver};
#[cfg(feature = "serde")]
use serde_derive::Serialize;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Parser)]
pub struct Opts {
    /// The name of the line to find
    #[arg(value_name = "line")]
    line: String,

    /// Only search for the line on these chips
    ///
    /// If not specified the named line is searched for on all chips in the system.
    ///
    /// Chips are searched in the order provided.
    ///
    /// The chip may be identified by number, name, or path.
    /// e.g. the following all select the same chip:
    ///     -c 0
    ///     -c gpiochip0
    ///     -c /dev/gpiochip0
    #[arg(short, long, value_name = "chip", verbatim_doc_comment)]
    chip: Vec<String>,

    /// Check all lines - don't assume names are unique
    ///
    /// If not specified then the command stops when a matching line is found.
    ///
    /// If specified then all lines with the specified name are returned,
    /// each on a separate line.
    #[arg(short = 's', long)]
    strict: bool,

    /// The directory containing the GPIO chips
    #[arg(long, value_name = "dir", env = "GPIOFIND_DEV_DIR", default_value = DEV_DIR)]
    dev_dir: PathBuf,

    #[command(flatten)]
    emit: EmitOpts,
}

pub fn cmd(opts: &Opts, verbose: bool) -> bool {
    match do_cmd(opts) {
        Ok(res) => {
            res.emit(opts);
            res.is_found()
        }
        Err(e) => {
            emit_error(&opts.emit, verbose, &e);
            false
        }
    }
}

fn do_cmd(opts: &Opts) -> Result<CmdResult> {
    let chips = if opts.chip.is_empty() {
        common::all_chip_paths(&opts.dev_dir)
    } else {
        opts.chip
            .iter()
            .map(|id| common::chip_lookup_from_id(id, &opts.dev_dir))
            .collect::<Result<Vec<PathBuf>>>()?
    };
    debug!(line = %opts.line, chips = chips.len(), "searching");
    let r = Resolver::new(Cdev);
    let lines = if opts.strict {
        r.resolve_all(&chips, &opts.line)
    } else {
        r.resolve(&chips, &opts.line).found().into_iter().collect()
    };
    Ok(CmdResult {
        name: opts.line.clone(),
        lines,
    })
}

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
struct CmdResult {
    name: String,
    lines: Vec<Found>,
}

impl CmdResult {
    // success requires at least one matching line
    fn is_found(&self) -> bool {
        !self.lines.is_empty()
    }

    fn emit(&self, opts: &Opts) {
        #[cfg(feature = "json")]
        if opts.emit.json {
            println!("{}", serde_json::to_string(self).unwrap());
            return;
        }
        #[cfg(not(feature = "json"))]
        let _ = opts;
        self.print();
    }

    fn print(&self) {
        for l in self.format() {
            println!("{l}");
        }
    }

    fn format(&self) -> Vec<String> {
        if self.lines.is_empty() {
            return vec![format_not_found(&self.name)];
        }
        self.lines
            .iter()
            .map(|l| format_found(&self.name, l))
            .collect()
    }
}

fn format_not_found(name: &str) -> String {
    format!("{} not found", name)
}

fn format_found(name: &str, f: &Found) -> String {
    format!("{}: {} {}", name, f.chip, f.offset)
}
