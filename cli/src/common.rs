// SPDX-FileCopyrightText: 2023 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anyhow::{bail, Result};
use clap::Parser;
use gpiocdev_find::{Cdev, Discoverer, Probe};
use std::path::{Path, PathBuf};

// common helper functions

pub fn all_chip_paths(dev_dir: &Path) -> Vec<PathBuf> {
    Discoverer::new(Cdev).with_root(dev_dir).chips()
}

pub fn chip_path_from_id(id: &str, dev_dir: &Path) -> PathBuf {
    if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) {
        // from number
        return dev_dir.join(format!("gpiochip{id}"));
    }
    if !id.contains('/') {
        // from name
        return dev_dir.join(id);
    }
    // from raw path
    id.into()
}

pub fn chip_lookup_from_id(id: &str, dev_dir: &Path) -> Result<PathBuf> {
    let p = chip_path_from_id(id, dev_dir);
    if !Cdev.is_chip(&p) {
        bail!("cannot find GPIO chip character device '{id}'");
    }
    Ok(p)
}

// common command line parser options

#[derive(Clone, Copy, Debug, Default, Parser)]
pub struct EmitOpts {
    /// Emit output in JSON format
    #[cfg(feature = "json")]
    #[arg(long)]
    pub json: bool,
}

pub fn emit_error(opts: &EmitOpts, verbose: bool, e: &anyhow::Error) {
    let e_str = format_error(verbose, e);
    #[cfg(feature = "json")]
    if opts.json {
        println!("{}", serde_json::json!({ "error": e_str }));
        return;
    }
    #[cfg(not(feature = "json"))]
    let _ = opts;
    eprintln!("{e_str}");
}

pub fn format_error(verbose: bool, e: &anyhow::Error) -> String {
    if verbose {
        format!("{e:#}")
    } else {
        format!("{e}")
    }
}
