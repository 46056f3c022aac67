/*
levels.rs

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

//! Build random levels from validated generation settings.
//!
//! Each level is built independently. The builder walks the colors in
//! palette order and pours each color into bottles by chunks of one to four
//! layers. A bottle never mixes two colors: the chunk that creates it is its
//! whole layer stack. Once the filled-bottle capacity of the level is
//! reached, the remaining units are discarded. The empty bottles are then
//! appended, and the bottle list is shuffled so that the deterministic fill
//! order does not show through in the final arrangement.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use super::bottle::{Bottle, MAX_LAYERS};
use super::level::{Level, LevelBatch};
use super::settings::{GenerationSettings, SettingsError};

/// Level batch generator.
pub struct LevelBuilder {
    /// Validated generation parameters.
    settings: GenerationSettings,
}

impl LevelBuilder {
    /// Create a [`LevelBuilder`] object for the given settings.
    ///
    /// # Errors
    ///
    /// The method returns a [`SettingsError`] when the settings do not
    /// describe a generatable batch (see
    /// [`GenerationSettings::validate`]).
    pub fn new(settings: GenerationSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Generate one level for each number in the configured range and return
    /// the batch.
    ///
    /// The caller provides the random source. Passing a seeded generator
    /// reproduces the same batch.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> LevelBatch {
        let count: usize = (self.settings.end_level - self.settings.start_level + 1) as usize;
        let mut levels: Vec<Level> = Vec::with_capacity(count);
        for level_number in self.settings.start_level..=self.settings.end_level {
            levels.push(self.build_level(level_number, rng));
        }
        debug!("Generated {} levels", levels.len());
        LevelBatch { levels }
    }

    /// Build a single level.
    fn build_level<R: Rng>(&self, level_number: u32, rng: &mut R) -> Level {
        let filled_slots: usize = self.settings.filled_bottles();
        let mut units_left: u32 = self.settings.color_counts.iter().sum();
        let mut bottles: Vec<Bottle> = Vec::with_capacity(self.settings.total_bottles);

        'colors: for (color_index, &count) in self.settings.color_counts.iter().enumerate() {
            let mut poured: u32 = 0;
            while poured < count {
                let slots_left: u32 = (filled_slots - bottles.len()) as u32;
                if slots_left == 0 {
                    // Capacity reached: the remaining units of this and the
                    // following colors are discarded.
                    debug!(
                        "Level {level_number}: capacity reached, {} units discarded",
                        units_left
                    );
                    break 'colors;
                }

                // A chunk holds one to four layers of the current color, but
                // never so many that an unfilled slot would be left without a
                // unit. Each remaining slot must still get at least one.
                let spare: u32 = units_left - slots_left;
                let max_layers: u32 = count - poured;
                let layers: u32 =
                    rng.random_range(1..=max_layers.min(MAX_LAYERS as u32).min(1 + spare));

                bottles.push(Bottle::filled(color_index as u8, layers as u8));
                poured += layers;
                units_left -= layers;
                debug!(
                    "Level {level_number}: bottle {} holds {layers} layers of color {color_index}",
                    bottles.len() - 1
                );
            }
        }

        for _ in 0..self.settings.empty_bottles {
            bottles.push(Bottle::empty());
        }

        // Unbiased in-place permutation (Fisher-Yates).
        bottles.shuffle(rng);

        Level {
            level_number,
            bottles,
        }
    }
}
