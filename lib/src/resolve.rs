// SPDX-FileCopyrightText: 2023 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::device::{Access, ChipHandle};
use crate::info::{ChipInfo, Offset};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// The location of a named line.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Found {
    /// The name of the chip containing the line, as reported in its [`ChipInfo`].
    pub chip: String,

    /// The path the chip was opened from.
    pub path: PathBuf,

    /// The offset of the line on the chip.
    pub offset: Offset,
}

/// The outcome of searching for a named line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SearchResult {
    /// The first line with the name.
    Found(Found),

    /// No line with the name was found on any chip.
    NotFound,
}

impl SearchResult {
    /// Returns the found line, if any.
    pub fn found(self) -> Option<Found> {
        match self {
            SearchResult::Found(f) => Some(f),
            SearchResult::NotFound => None,
        }
    }

    /// Returns true if a line was found.
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }
}

impl From<SearchResult> for Option<Found> {
    fn from(r: SearchResult) -> Self {
        r.found()
    }
}

/// Searches the lines of a set of chips for a named line.
///
/// Line names are not guaranteed to be unique, so chips are searched in the order provided,
/// and lines within a chip in ascending offset order, with the first match taking precedence.
///
/// Chips and lines that cannot be read are skipped.
///
/// Only one chip is open at a time, and each chip is closed before moving on to the next,
/// or returning.
///
/// # Examples
///```no_run
/// use gpiocdev_find::{Cdev, Discoverer, Resolver, SearchResult};
///
/// let chips = Discoverer::new(Cdev).chips();
/// match Resolver::new(Cdev).resolve(&chips, "GPIO19") {
///     SearchResult::Found(f) => println!("GPIO19: {} {}", f.chip, f.offset),
///     SearchResult::NotFound => println!("GPIO19 not found"),
/// }
///```
#[derive(Clone, Debug)]
pub struct Resolver<A> {
    access: A,
}

impl<A: Access> Resolver<A> {
    /// Constructs a Resolver that opens chips using the given access.
    pub fn new(access: A) -> Self {
        Resolver { access }
    }

    /// Find the first line with the given name.
    ///
    /// The name must match exactly.  Unnamed lines never match.
    pub fn resolve<P: AsRef<Path>>(&self, chips: &[P], name: &str) -> SearchResult {
        for path in chips {
            let mut found = None;
            self.scan(path.as_ref(), name, |f| {
                found = Some(f);
                false
            });
            if let Some(f) = found {
                return SearchResult::Found(f);
            }
        }
        SearchResult::NotFound
    }

    /// Find all the lines with the given name.
    ///
    /// The lines are returned in search order, so the first is the line that
    /// [`resolve`] would return.
    ///
    /// [`resolve`]: Self::resolve
    pub fn resolve_all<P: AsRef<Path>>(&self, chips: &[P], name: &str) -> Vec<Found> {
        let mut found = Vec::new();
        for path in chips {
            self.scan(path.as_ref(), name, |f| {
                found.push(f);
                true
            });
        }
        found
    }

    // Scans the lines of one chip, passing matches to the sink until it returns false.
    //
    // The chip is closed on return.
    fn scan<F>(&self, path: &Path, name: &str, mut sink: F)
    where
        F: FnMut(Found) -> bool,
    {
        let chip = match self.access.open(path) {
            Ok(chip) => chip,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping chip: unable to open");
                return;
            }
        };
        let ChipInfo {
            name: chip_name,
            num_lines,
            ..
        } = match chip.info() {
            Ok(info) => info,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping chip: unable to read info");
                return;
            }
        };
        trace!(chip = %chip_name, num_lines, "searching chip");
        for offset in 0..num_lines {
            let li = match chip.line_info(offset) {
                Ok(li) => li,
                Err(e) => {
                    debug!(chip = %chip_name, offset, error = %e, "skipping line: unable to read info");
                    continue;
                }
            };
            if li.is_named(name) {
                let f = Found {
                    chip: chip_name.clone(),
                    path: path.to_path_buf(),
                    offset,
                };
                if !sink(f) {
                    return;
                }
            }
        }
    }
}
