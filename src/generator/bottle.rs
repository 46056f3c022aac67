/*
bottle.rs

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

//! One puzzle bottle.
//!
//! A bottle always carries four layer slots, but only the first
//! [`Bottle::color_count`] slots hold a meaningful palette index. The unused
//! trailing slots are kept at zero and must never be read; consumers gate on
//! the count, not on the slot values. This fixed shape is also the persisted
//! shape: the `colorIndices` array always has four entries in the level file,
//! even for an empty bottle.

use serde::{Deserialize, Serialize};

/// Number of layer slots in a bottle.
pub const MAX_LAYERS: usize = 4;

/// A bottle and its stacked color layers.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", try_from = "BottleRepr")]
pub struct Bottle {
    /// Number of filled layers, between 0 (empty bottle) and 4.
    color_count: u8,

    /// Palette index of each layer, from the bottom of the bottle up. Slots
    /// at and past [`Bottle::color_count`] carry no meaning.
    color_indices: [u8; MAX_LAYERS],
}

/// Raw persisted shape of a [`Bottle`], before the layer count is checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BottleRepr {
    color_count: u8,
    color_indices: [u8; MAX_LAYERS],
}

impl TryFrom<BottleRepr> for Bottle {
    type Error = String;

    fn try_from(repr: BottleRepr) -> Result<Self, Self::Error> {
        if usize::from(repr.color_count) > MAX_LAYERS {
            return Err(format!(
                "colorCount is {} but a bottle holds at most {MAX_LAYERS} layers",
                repr.color_count
            ));
        }
        Ok(Self {
            color_count: repr.color_count,
            color_indices: repr.color_indices,
        })
    }
}

impl Bottle {
    /// Create an empty bottle.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a bottle filled with `layers` layers of the color at the given
    /// palette index.
    ///
    /// `layers` must be between 1 and [`MAX_LAYERS`].
    pub fn filled(color_index: u8, layers: u8) -> Self {
        debug_assert!(layers >= 1 && usize::from(layers) <= MAX_LAYERS);
        let mut color_indices: [u8; MAX_LAYERS] = [0; MAX_LAYERS];
        for slot in color_indices.iter_mut().take(usize::from(layers)) {
            *slot = color_index;
        }
        Self {
            color_count: layers,
            color_indices,
        }
    }

    /// Return the number of filled layers.
    pub fn color_count(&self) -> u8 {
        self.color_count
    }

    /// Return true when the bottle holds no layer.
    pub fn is_empty(&self) -> bool {
        self.color_count == 0
    }

    /// Return the palette indices of the filled layers, bottom up.
    ///
    /// The unused trailing slots are not part of the returned slice.
    pub fn layers(&self) -> &[u8] {
        &self.color_indices[..usize::from(self.color_count)]
    }
}
