// SPDX-FileCopyrightText: 2023 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

// A simulated set of GPIO chips.
//
// The chips appear as plain files in a temporary directory, so they can be discovered,
// while their lines are held in memory and served by the Sim's Access implementation.

#![allow(dead_code)]

use gpiocdev_find::{Access, ChipHandle, ChipInfo, Discoverer, LineInfo, Offset, Probe, Result};
use std::cell::Cell;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::TempDir;

/// The definition of a simulated chip.
#[derive(Clone, Debug, Default)]
pub struct Bank {
    num_lines: u32,
    names: BTreeMap<Offset, String>,
    unreadable: HashSet<Offset>,
    unopenable: bool,
    no_info: bool,
}

impl Bank {
    pub fn new(num_lines: u32) -> Bank {
        Bank {
            num_lines,
            ..Default::default()
        }
    }

    pub fn name(mut self, offset: Offset, name: &str) -> Bank {
        self.names.insert(offset, name.into());
        self
    }

    // line info for the offset cannot be read
    pub fn unreadable(mut self, offset: Offset) -> Bank {
        self.unreadable.insert(offset);
        self
    }

    // the chip cannot be opened
    pub fn unopenable(mut self) -> Bank {
        self.unopenable = true;
        self
    }

    // the chip info cannot be read
    pub fn without_info(mut self) -> Bank {
        self.no_info = true;
        self
    }
}

#[derive(Debug, Default)]
pub struct Counters {
    // currently open chips
    pub open: Cell<usize>,
    // peak of open
    pub max_open: Cell<usize>,
    pub opened: Cell<usize>,
    pub closed: Cell<usize>,
    // open attempts, in order, by chip name
    pub attempts: std::cell::RefCell<Vec<String>>,
}

pub struct Builder {
    banks: Vec<(String, Bank)>,
    symlinks: Vec<(String, String)>,
    files: Vec<String>,
}

pub fn builder() -> Builder {
    Builder {
        banks: Vec::new(),
        symlinks: Vec::new(),
        files: Vec::new(),
    }
}

impl Builder {
    pub fn with_bank(mut self, name: &str, bank: Bank) -> Builder {
        self.banks.push((name.into(), bank));
        self
    }

    // a symlink named link that points to the target entry
    pub fn with_symlink(mut self, link: &str, target: &str) -> Builder {
        self.symlinks.push((link.into(), target.into()));
        self
    }

    // a plain file that is not a chip
    pub fn with_file(mut self, name: &str) -> Builder {
        self.files.push(name.into());
        self
    }

    pub fn live(self) -> io::Result<Sim> {
        let dir = tempfile::tempdir()?;
        for (name, _) in &self.banks {
            fs::write(dir.path().join(name), b"")?;
        }
        for name in &self.files {
            fs::write(dir.path().join(name), b"")?;
        }
        for (link, target) in &self.symlinks {
            std::os::unix::fs::symlink(dir.path().join(target), dir.path().join(link))?;
        }
        Ok(Sim {
            dir,
            banks: self.banks.into_iter().collect(),
            counters: Rc::new(Counters::default()),
        })
    }
}

pub struct Sim {
    dir: TempDir,
    banks: HashMap<String, Bank>,
    pub counters: Rc<Counters>,
}

impl Sim {
    pub fn dev_dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn dev_path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn discoverer(&self) -> Discoverer<&Sim> {
        Discoverer::new(self).with_root(self.dev_dir())
    }

    pub fn chips(&self) -> Vec<PathBuf> {
        self.discoverer().chips()
    }

    fn bank(&self, path: &Path) -> Option<(String, &Bank)> {
        let name = path.file_name()?.to_str()?;
        self.banks.get(name).map(|b| (name.to_string(), b))
    }
}

impl Probe for Sim {
    fn is_chip(&self, path: &Path) -> bool {
        self.bank(path).is_some()
    }
}

impl Access for Sim {
    type Chip = SimChip;

    fn open(&self, path: &Path) -> Result<SimChip> {
        let (name, bank) = self
            .bank(path)
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;
        self.counters.attempts.borrow_mut().push(name.clone());
        if bank.unopenable {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied).into());
        }
        let c = &self.counters;
        c.open.set(c.open.get() + 1);
        c.max_open.set(c.max_open.get().max(c.open.get()));
        c.opened.set(c.opened.get() + 1);
        Ok(SimChip {
            name,
            bank: bank.clone(),
            counters: self.counters.clone(),
        })
    }
}

pub struct SimChip {
    name: String,
    bank: Bank,
    counters: Rc<Counters>,
}

impl ChipHandle for SimChip {
    fn info(&self) -> Result<ChipInfo> {
        if self.bank.no_info {
            return Err(io::Error::from(io::ErrorKind::InvalidData).into());
        }
        Ok(ChipInfo {
            name: self.name.clone(),
            label: "sim".into(),
            num_lines: self.bank.num_lines,
        })
    }

    fn line_info(&self, offset: Offset) -> Result<LineInfo> {
        if offset >= self.bank.num_lines || self.bank.unreadable.contains(&offset) {
            return Err(io::Error::from(io::ErrorKind::InvalidInput).into());
        }
        Ok(LineInfo {
            offset,
            name: self.bank.names.get(&offset).cloned(),
        })
    }
}

impl Drop for SimChip {
    fn drop(&mut self) {
        let c = &self.counters;
        c.open.set(c.open.get() - 1);
        c.closed.set(c.closed.get() + 1);
    }
}
