// SPDX-FileCopyrightText: 2023 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::info::{ChipInfo, LineInfo, Offset};
use crate::Result;
use gpiocdev::chip::Chip;
use std::path::Path;

/// Identifies the device namespace entries that are GPIO chips.
pub trait Probe {
    /// Check if the path refers to a GPIO chip.
    ///
    /// Any failure to examine the path is treated as not being a chip.
    fn is_chip(&self, path: &Path) -> bool;
}

/// Opens GPIO chips for reading their line info.
pub trait Access {
    /// The handle to an open chip.
    ///
    /// The chip is closed when the handle is dropped.
    type Chip: ChipHandle;

    /// Open the chip at the given path.
    fn open(&self, path: &Path) -> Result<Self::Chip>;
}

/// An open GPIO chip.
pub trait ChipHandle {
    /// Get the information for the chip.
    fn info(&self) -> Result<ChipInfo>;

    /// Get the information for a line on the chip.
    fn line_info(&self, offset: Offset) -> Result<LineInfo>;
}

/// Access to the GPIO chips on the system via the GPIO character device.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cdev;

impl Probe for Cdev {
    fn is_chip(&self, path: &Path) -> bool {
        gpiocdev::chip::is_chip(path).is_ok()
    }
}

impl Access for Cdev {
    type Chip = Chip;

    fn open(&self, path: &Path) -> Result<Chip> {
        Ok(Chip::from_path(path)?)
    }
}

impl ChipHandle for Chip {
    fn info(&self) -> Result<ChipInfo> {
        Ok(ChipInfo::from(Chip::info(self)?))
    }

    fn line_info(&self, offset: Offset) -> Result<LineInfo> {
        Ok(LineInfo::from(Chip::line_info(self, offset)?))
    }
}

impl<T: Probe + ?Sized> Probe for &T {
    fn is_chip(&self, path: &Path) -> bool {
        (**self).is_chip(path)
    }
}

impl<T: Access + ?Sized> Access for &T {
    type Chip = T::Chip;

    fn open(&self, path: &Path) -> Result<Self::Chip> {
        (**self).open(path)
    }
}
