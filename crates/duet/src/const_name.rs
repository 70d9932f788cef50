//! Rust constant names

// SPDX-FileCopyrightText: © 2026 Marcus Rowe <undisbeliever@gmail.com>
//
// SPDX-License-Identifier: MIT

use crate::MelodyError;

use std::fmt::Display;
use std::path::Path;

/// An upper-case Rust constant identifier.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct ConstName(String);

impl ConstName {
    /// Upper-cases `stem`, replacing spaces (and any other non-identifier character) with `_`.
    pub fn from_file_stem(stem: &str) -> Result<Self, MelodyError> {
        let name: String = stem
            .chars()
            .map(|c| match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '_' => c.to_ascii_uppercase(),
                _ => '_',
            })
            .collect();

        match name.chars().next() {
            Some(c) if !c.is_ascii_digit() => Ok(Self(name)),
            _ => Err(MelodyError::InvalidName(stem.to_owned())),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, MelodyError> {
        match path.file_stem() {
            Some(stem) => Self::from_file_stem(&stem.to_string_lossy()),
            None => Err(MelodyError::InvalidName(path.display().to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ConstName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
