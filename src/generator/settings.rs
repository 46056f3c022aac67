/*
settings.rs

Copyright 2026 The Poursort Authors

This file is part of Poursort.

Poursort is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Poursort is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Poursort. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Generation parameters and their validation.

use std::error::Error;
use std::fmt;

/// Parameters for one generation run.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    /// Number of the first level to generate. Must be at least 1.
    pub start_level: u32,

    /// Number of the last level to generate, inclusive.
    pub end_level: u32,

    /// Number of bottles in each level, filled and empty bottles together.
    pub total_bottles: usize,

    /// Number of empty bottles in each level. Must leave room for at least
    /// one filled bottle.
    pub empty_bottles: usize,

    /// Total layer units to distribute for each color, indexed by palette
    /// position. Every entry must be positive.
    pub color_counts: Vec<u32>,
}

/// Type of configuration errors.
#[derive(Debug, PartialEq, Eq)]
pub enum SettingsError {
    /// The per-color unit list is empty; there is nothing to distribute.
    NoColors,

    /// A per-color unit count is zero.
    ZeroColorCount(usize),

    /// The first level number is zero.
    ZeroStartLevel,

    /// The level range contains no level.
    EmptyLevelRange { start: u32, end: u32 },

    /// The empty bottles leave no room for a filled bottle.
    TooManyEmptyBottles { empty: usize, total: usize },

    /// Fewer layer units than bottles to fill.
    NotEnoughPieces { pieces: u32, bottles: usize },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SettingsError::NoColors => {
                write!(f, "the color unit counts must not be empty")
            }
            SettingsError::ZeroColorCount(index) => {
                write!(f, "the unit count for color {index} must be positive")
            }
            SettingsError::ZeroStartLevel => {
                write!(f, "level numbers start at 1")
            }
            SettingsError::EmptyLevelRange { start, end } => {
                write!(f, "the start level ({start}) is past the end level ({end})")
            }
            SettingsError::TooManyEmptyBottles { empty, total } => {
                write!(
                    f,
                    "{empty} empty bottles out of {total} leave no room for a filled bottle"
                )
            }
            SettingsError::NotEnoughPieces { pieces, bottles } => {
                write!(
                    f,
                    "{pieces} layer units cannot fill {bottles} bottles; each filled bottle needs at least one unit"
                )
            }
        }
    }
}

impl Error for SettingsError {}

impl GenerationSettings {
    /// Verify that the settings describe a generatable batch.
    ///
    /// # Errors
    ///
    /// The method returns the first [`SettingsError`] found. Generation must
    /// not proceed on invalid settings.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.color_counts.is_empty() {
            return Err(SettingsError::NoColors);
        }
        if let Some(index) = self.color_counts.iter().position(|&count| count == 0) {
            return Err(SettingsError::ZeroColorCount(index));
        }
        if self.start_level == 0 {
            return Err(SettingsError::ZeroStartLevel);
        }
        if self.start_level > self.end_level {
            return Err(SettingsError::EmptyLevelRange {
                start: self.start_level,
                end: self.end_level,
            });
        }
        if self.empty_bottles >= self.total_bottles {
            return Err(SettingsError::TooManyEmptyBottles {
                empty: self.empty_bottles,
                total: self.total_bottles,
            });
        }
        let pieces: u32 = self.color_counts.iter().sum();
        let filled_bottles: usize = self.total_bottles - self.empty_bottles;
        if (pieces as usize) < filled_bottles {
            return Err(SettingsError::NotEnoughPieces {
                pieces,
                bottles: filled_bottles,
            });
        }
        Ok(())
    }

    /// Return the number of filled bottles in each level.
    pub fn filled_bottles(&self) -> usize {
        self.total_bottles - self.empty_bottles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> GenerationSettings {
        GenerationSettings {
            start_level: 1,
            end_level: 10,
            total_bottles: 4,
            empty_bottles: 1,
            color_counts: vec![4, 4, 4],
        }
    }

    #[test]
    fn valid_settings() {
        assert_eq!(settings().validate(), Ok(()));
        assert_eq!(settings().filled_bottles(), 3);
    }

    #[test]
    fn no_colors() {
        let mut s: GenerationSettings = settings();
        s.color_counts.clear();
        assert_eq!(s.validate(), Err(SettingsError::NoColors));
    }

    #[test]
    fn zero_color_count() {
        let mut s: GenerationSettings = settings();
        s.color_counts[1] = 0;
        assert_eq!(s.validate(), Err(SettingsError::ZeroColorCount(1)));
    }

    #[test]
    fn zero_start_level() {
        let mut s: GenerationSettings = settings();
        s.start_level = 0;
        assert_eq!(s.validate(), Err(SettingsError::ZeroStartLevel));
    }

    #[test]
    fn empty_level_range() {
        let mut s: GenerationSettings = settings();
        s.start_level = 5;
        s.end_level = 4;
        assert_eq!(
            s.validate(),
            Err(SettingsError::EmptyLevelRange { start: 5, end: 4 })
        );
    }

    #[test]
    fn single_level_range_is_valid() {
        let mut s: GenerationSettings = settings();
        s.start_level = 7;
        s.end_level = 7;
        assert_eq!(s.validate(), Ok(()));
    }

    #[test]
    fn too_many_empty_bottles() {
        let mut s: GenerationSettings = settings();
        s.empty_bottles = 4;
        assert_eq!(
            s.validate(),
            Err(SettingsError::TooManyEmptyBottles { empty: 4, total: 4 })
        );
    }

    #[test]
    fn not_enough_pieces() {
        let mut s: GenerationSettings = settings();
        s.total_bottles = 20;
        s.empty_bottles = 2;
        assert_eq!(
            s.validate(),
            Err(SettingsError::NotEnoughPieces {
                pieces: 12,
                bottles: 18
            })
        );
    }
}
