/*
palette.rs

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

//! Display palette.
//!
//! Generated levels never store colors; they store indices into an ordered
//! palette. The palette only matters to the presentation side, which resolves
//! each index to a [`PaletteColor`] when drawing a bottle.

/// A display color referenced by the bottle layer indices.
///
/// Color components are integers between 0 and 255.
#[derive(Debug, Clone)]
pub struct PaletteColor {
    /// Human-readable color name.
    pub name: &'static str,

    /// Display value as red, green, and blue components.
    pub rgb: (u8, u8, u8),
}

/// Return the default four-color palette.
///
/// The layer indices stored in a level refer to this list by position:
/// 0 = Red, 1 = Blue, 2 = Green, 3 = Yellow.
pub fn default_palette() -> Vec<PaletteColor> {
    vec![
        PaletteColor {
            name: "Red",
            rgb: (255, 0, 0),
        },
        PaletteColor {
            name: "Blue",
            rgb: (0, 0, 255),
        },
        PaletteColor {
            name: "Green",
            rgb: (0, 255, 0),
        },
        PaletteColor {
            name: "Yellow",
            rgb: (255, 255, 0),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_order() {
        let palette: Vec<PaletteColor> = default_palette();
        let names: Vec<&str> = palette.iter().map(|c| c.name).collect();
        assert_eq!(names, ["Red", "Blue", "Green", "Yellow"]);
    }
}
