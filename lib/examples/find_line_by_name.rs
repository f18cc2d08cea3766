// SPDX-FileCopyrightText: 2023 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

// Basic example of finding a line with the given name.

use gpiocdev_find::SearchResult;

fn main() {
    let line_name = "GPIO22";
    match gpiocdev_find::find_named_line(line_name) {
        SearchResult::Found(gpio22) => println!("{}: {} {}", line_name, gpio22.chip, gpio22.offset),
        SearchResult::NotFound => println!("{} not found", line_name),
    }
}
