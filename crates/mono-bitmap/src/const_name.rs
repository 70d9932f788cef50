//! Rust constant names

// SPDX-FileCopyrightText: © 2026 Marcus Rowe <undisbeliever@gmail.com>
//
// SPDX-License-Identifier: MIT

use crate::BitmapError;

use std::fmt::Display;
use std::path::Path;

/// An upper-case Rust constant identifier.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct ConstName(String);

impl ConstName {
    /// Upper-cases `stem`, replacing spaces (and any other non-identifier character) with `_`.
    pub fn from_file_stem(stem: &str) -> Result<Self, BitmapError> {
        let name: String = stem
            .chars()
            .map(|c| match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '_' => c.to_ascii_uppercase(),
                _ => '_',
            })
            .collect();

        match name.chars().next() {
            Some(c) if !c.is_ascii_digit() => Ok(Self(name)),
            _ => Err(BitmapError::InvalidName(stem.to_owned())),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, BitmapError> {
        match path.file_stem() {
            Some(stem) => Self::from_file_stem(&stem.to_string_lossy()),
            None => Err(BitmapError::InvalidName(path.display().to_string())),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_file_stem() {
        assert_eq!(ConstName::from_file_stem("bird").unwrap().as_str(), "BIRD");
        assert_eq!(
            ConstName::from_file_stem("game over").unwrap().as_str(),
            "GAME_OVER"
        );
        assert_eq!(
            ConstName::from_file_stem("digit-1").unwrap().as_str(),
            "DIGIT_1"
        );
        assert_eq!(
            ConstName::from_file_stem("_hidden").unwrap().as_str(),
            "_HIDDEN"
        );
    }

    #[test]
    fn test_invalid_names() {
        assert!(matches!(
            ConstName::from_file_stem(""),
            Err(BitmapError::InvalidName(_))
        ));
        assert!(matches!(
            ConstName::from_file_stem("1up"),
            Err(BitmapError::InvalidName(_))
        ));
    }

    #[test]
    fn test_from_path() {
        let name = ConstName::from_path(Path::new("images/ship left.bmp")).unwrap();
        assert_eq!(name.as_str(), "SHIP_LEFT");
    }
}
