// SPDX-FileCopyrightText: 2023 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cmp::Ordering;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

/// Compare two names in version order.
///
/// Names are split into alternating runs of digits and non-digits.
/// Digit runs are compared by numeric value, so "gpiochip2" sorts before "gpiochip10",
/// while non-digit runs are compared bytewise.
///
/// Digit runs with the same value are ordered by the number of leading zeros, fewest first,
/// so the ordering is only `Equal` for identical names.
pub fn compare(a: &[u8], b: &[u8]) -> Ordering {
    let mut ra = Runs(a);
    let mut rb = Runs(b);
    loop {
        let ord = match (ra.next(), rb.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if is_digits(x) && is_digits(y) {
                    compare_numeric(x, y)
                } else {
                    x.cmp(y)
                }
            }
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
}

/// Compare two chip paths in version order.
pub fn path_compare(a: &Path, b: &Path) -> Ordering {
    compare(a.as_os_str().as_bytes(), b.as_os_str().as_bytes())
}

// Numeric comparison of two digit runs of arbitrary length.
fn compare_numeric(a: &[u8], b: &[u8]) -> Ordering {
    let na = trim_zeros(a);
    let nb = trim_zeros(b);
    na.len()
        .cmp(&nb.len())
        .then_with(|| na.cmp(nb))
        .then_with(|| a.len().cmp(&b.len()))
}

fn trim_zeros(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|&c| c != b'0').unwrap_or(s.len());
    &s[start..]
}

fn is_digits(s: &[u8]) -> bool {
    s.first().is_some_and(u8::is_ascii_digit)
}

// Splits a name into maximal runs of either digits or non-digits.
struct Runs<'a>(&'a [u8]);

impl<'a> Iterator for Runs<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let first = self.0.first()?;
        let digits = first.is_ascii_digit();
        let len = self
            .0
            .iter()
            .position(|c| c.is_ascii_digit() != digits)
            .unwrap_or(self.0.len());
        let (run, rest) = self.0.split_at(len);
        self.0 = rest;
        Some(run)
    }
}
