// SPDX-FileCopyrightText: 2023 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::device::Probe;
use crate::{version, Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// The directory containing the GPIO character devices.
pub const DEV_DIR: &str = "/dev";

/// Locates the GPIO chips in a device directory.
///
/// # Examples
///```no_run
/// use gpiocdev_find::{Cdev, Discoverer};
///
/// for path in Discoverer::new(Cdev).chips() {
///     println!("{}", path.display());
/// }
///```
#[derive(Clone, Debug)]
pub struct Discoverer<P> {
    probe: P,
    root: PathBuf,
}

impl<P: Probe> Discoverer<P> {
    /// Constructs a Discoverer that searches [`DEV_DIR`] using the given probe.
    pub fn new(probe: P) -> Self {
        Discoverer {
            probe,
            root: PathBuf::from(DEV_DIR),
        }
    }

    /// Set the directory to search for chips.
    pub fn with_root<R: Into<PathBuf>>(mut self, root: R) -> Self {
        self.root = root.into();
        self
    }

    /// The directory searched for chips.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the paths of all the GPIO chips in the directory.
    ///
    /// The paths are sorted in version order, so "gpiochip2" precedes "gpiochip10".
    ///
    /// Symbolic links are ignored so each chip is only returned once.
    ///
    /// If the directory cannot be read then no chips are returned.
    pub fn chips(&self) -> Vec<PathBuf> {
        self.try_chips().unwrap_or_else(|e| {
            debug!(error = %e, "no chips found");
            Vec::new()
        })
    }

    /// Returns the paths of all the GPIO chips in the directory.
    ///
    /// As per [`chips`], but returns an error if the directory cannot be read.
    ///
    /// [`chips`]: Self::chips
    pub fn try_chips(&self) -> Result<Vec<PathBuf>> {
        let mut chips = fs::read_dir(&self.root)
            .map_err(|e| Error::Namespace(self.root.clone(), e))?
            .filter_map(|x| x.ok())
            .map(|de| de.path())
            .filter(|p| self.is_chip(p))
            .collect::<Vec<PathBuf>>();
        chips.sort_unstable_by(|a, b| version::path_compare(a, b));
        Ok(chips)
    }

    fn is_chip(&self, path: &Path) -> bool {
        match fs::symlink_metadata(path) {
            Ok(m) if m.file_type().is_symlink() => {
                trace!(path = %path.display(), "ignoring symlink");
                false
            }
            Ok(_) => self.probe.is_chip(path),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "unable to stat");
                false
            }
        }
    }
}
