// SPDX-FileCopyrightText: 2023 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// An identifier for a line on a particular chip.
///
/// Valid offsets are in the range 0..`num_lines` as reported in the [`ChipInfo`].
pub type Offset = u32;

/// The identifying information for a GPIO chip.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ChipInfo {
    /// The system name for the chip, such as "*gpiochip0*".
    pub name: String,

    /// A functional name for the chip.
    ///
    /// May be empty.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
    pub label: String,

    /// The number of lines provided by the chip.
    pub num_lines: u32,
}

impl From<gpiocdev::chip::Info> for ChipInfo {
    fn from(ci: gpiocdev::chip::Info) -> Self {
        ChipInfo {
            name: ci.name,
            label: ci.label,
            num_lines: ci.num_lines,
        }
    }
}

/// The identifying information for a line.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct LineInfo {
    /// The line offset on the GPIO chip.
    pub offset: Offset,

    /// The name of the line, as specified by the GPIO chip.
    ///
    /// None if the line is unnamed.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
}

impl LineInfo {
    /// Check if the line has exactly the given name.
    ///
    /// Unnamed lines never match.
    pub fn is_named(&self, name: &str) -> bool {
        self.name
            .as_deref()
            .is_some_and(|n| !n.is_empty() && n == name)
    }
}

impl From<gpiocdev::line::Info> for LineInfo {
    fn from(li: gpiocdev::line::Info) -> Self {
        LineInfo {
            offset: li.offset,
            name: Some(li.name).filter(|n| !n.is_empty()),
        }
    }
}
