// SPDX-FileCopyrightText: 2023 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A library for finding GPIO lines by name on Linux platforms
//! using the GPIO character device.
//!
//! Line names are not guaranteed to be unique, so the search is performed in a
//! well defined order: chips are discovered with the [`Discoverer`], and are sorted
//! in version order, then the [`Resolver`] searches the lines of each chip in
//! ascending offset order, with the first matching line taking precedence.
//!
//! To find a line on the system:
//! ```no_run
//! match gpiocdev_find::find_named_line("GPIO19") {
//!     gpiocdev_find::SearchResult::Found(f) => println!("GPIO19: {} {}", f.chip, f.offset),
//!     gpiocdev_find::SearchResult::NotFound => println!("GPIO19 not found"),
//! }
//! ```
//!
//! The device access is abstracted by the [`Probe`] and [`Access`] traits,
//! which are implemented for the GPIO character device by [`Cdev`].

use std::path::PathBuf;

/// Traits and types providing access to GPIO chips.
pub mod device;

/// Locating the GPIO chips on the system.
pub mod discover;

/// Types describing chips and lines.
pub mod info;

/// Searching chips for named lines.
pub mod resolve;

/// Version ordering of chip names and paths.
pub mod version;

pub use device::{Access, Cdev, ChipHandle, Probe};
pub use discover::Discoverer;
pub use info::{ChipInfo, LineInfo, Offset};
pub use resolve::{Found, Resolver, SearchResult};

/// Find the first line with the given name on the system.
///
/// Searches all the GPIO chips in `/dev`.
pub fn find_named_line(name: &str) -> SearchResult {
    let chips = Discoverer::new(Cdev).chips();
    Resolver::new(Cdev).resolve(&chips, name)
}

/// Errors returned by [`gpiocdev_find`] functions.
///
/// [`gpiocdev_find`]: crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The directory containing the chips could not be read.
    #[error("unable to read directory \"{}\"", .0.display())]
    Namespace(PathBuf, #[source] std::io::Error),

    /// An error returned from the GPIO character device.
    #[error(transparent)]
    Cdev(#[from] gpiocdev::Error),

    /// An error returned from an underlying os call.
    ///
    /// Not produced by [`Cdev`], but available to other [`Access`] and [`ChipHandle`]
    /// implementations to report their failures.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The result for [`gpiocdev_find`] functions.
///
/// [`gpiocdev_find`]: crate
pub type Result<T> = std::result::Result<T, Error>;
