/*
level.rs

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

//! Level and level batch records.
//!
//! These are the records that the saver persists. Their serde field names
//! (`levels`, `levelNumber`, `bottles`) are the stable file contract.

use serde::{Deserialize, Serialize};

use super::bottle::Bottle;

/// One generated level.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    /// Level number, unique within a batch.
    pub level_number: u32,

    /// Bottles in rendering order.
    pub bottles: Vec<Bottle>,
}

/// An ordered collection of levels, as produced by one generation run.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct LevelBatch {
    /// Levels in generation order.
    pub levels: Vec<Level>,
}

impl LevelBatch {
    /// Return the level with the given number, or None if the batch does not
    /// contain it.
    pub fn get_level(&self, level_number: u32) -> Option<&Level> {
        self.levels
            .iter()
            .find(|level| level.level_number == level_number)
    }

    /// Return the number of levels in the batch.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Return true when the batch has no levels.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> LevelBatch {
        LevelBatch {
            levels: vec![
                Level {
                    level_number: 3,
                    bottles: vec![Bottle::filled(0, 4), Bottle::empty()],
                },
                Level {
                    level_number: 4,
                    bottles: vec![Bottle::empty()],
                },
            ],
        }
    }

    #[test]
    fn get_level_by_number() {
        let batch: LevelBatch = batch();
        let level = batch.get_level(4).unwrap();
        assert_eq!(level.level_number, 4);
        assert_eq!(level.bottles.len(), 1);
    }

    #[test]
    fn get_missing_level() {
        assert!(batch().get_level(99).is_none());
    }

    #[test]
    fn len_and_is_empty() {
        assert_eq!(batch().len(), 2);
        assert!(!batch().is_empty());
        assert!(LevelBatch::default().is_empty());
    }

    #[test]
    fn persisted_field_names() {
        let json: String = serde_json::to_string(&batch()).unwrap();
        assert!(json.starts_with(r#"{"levels":["#));
        assert!(json.contains(r#""levelNumber":3"#));
        assert!(json.contains(r#""bottles":["#));
    }
}
