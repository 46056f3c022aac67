/*
render.rs

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

//! Contract between the level data and its presentation.
//!
//! The in-game renderer is not part of this tool. What belongs here is the
//! seam it depends on: the [`BottleView`] trait, which a bottle visual
//! implements to receive its layout and palette, and the level lookup with
//! its graceful missing-level behavior. [`ConsoleBottle`] is the textual
//! implementation that backs the `--show` preview.

use log::error;
use std::fmt;

use crate::generator::bottle::Bottle;
use crate::generator::level::LevelBatch;
use crate::palette::PaletteColor;

/// A bottle visual that can take over a generated bottle layout.
///
/// Implementations must only read the filled layers of the bottle (the
/// [`Bottle::layers`] slice); the unused trailing slots carry no meaning.
pub trait BottleView {
    /// Update the visual from the bottle layout, resolving each layer index
    /// through the palette.
    fn apply_layout(&mut self, bottle: &Bottle, palette: &[PaletteColor]);
}

/// Textual bottle representation for the console preview.
#[derive(Default)]
pub struct ConsoleBottle {
    /// Color name of each filled layer, from the bottom of the bottle up.
    layers: Vec<String>,
}

impl ConsoleBottle {
    /// Create a [`ConsoleBottle`] object.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BottleView for ConsoleBottle {
    fn apply_layout(&mut self, bottle: &Bottle, palette: &[PaletteColor]) {
        self.layers.clear();
        for &index in bottle.layers() {
            let name: String = match palette.get(usize::from(index)) {
                Some(color) => color.name.to_string(),
                None => format!("color {index}"),
            };
            self.layers.push(name);
        }
    }
}

impl fmt::Display for ConsoleBottle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.layers.is_empty() {
            write!(f, "(empty)")
        } else {
            write!(f, "{}", self.layers.join(" | "))
        }
    }
}

/// Print a textual preview of the given level.
///
/// A missing level number is an ordinary navigation outcome: it is logged and
/// nothing is drawn.
pub fn show_level(batch: &LevelBatch, level_number: u32, palette: &[PaletteColor]) {
    let Some(level) = batch.get_level(level_number) else {
        error!("Level {level_number} not found");
        return;
    };

    println!("Level {} ({} bottles)", level.level_number, level.bottles.len());
    let mut view: ConsoleBottle = ConsoleBottle::new();
    for (position, bottle) in level.bottles.iter().enumerate() {
        view.apply_layout(bottle, palette);
        println!("  bottle {position}: {view}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::level::Level;
    use crate::palette::default_palette;

    #[test]
    fn console_bottle_resolves_palette_names() {
        let mut view: ConsoleBottle = ConsoleBottle::new();
        view.apply_layout(&Bottle::filled(1, 3), &default_palette());
        assert_eq!(view.to_string(), "Blue | Blue | Blue");
    }

    #[test]
    fn console_bottle_shows_empty() {
        let mut view: ConsoleBottle = ConsoleBottle::new();
        view.apply_layout(&Bottle::empty(), &default_palette());
        assert_eq!(view.to_string(), "(empty)");
    }

    #[test]
    fn console_bottle_ignores_unused_slots() {
        // The slots past the layer count hold junk indices here. Only the
        // first colorCount slots may be resolved.
        let json: &str = r#"{"colorCount":1,"colorIndices":[0,250,250,250]}"#;
        let bottle: Bottle = serde_json::from_str(json).unwrap();

        let mut view: ConsoleBottle = ConsoleBottle::new();
        view.apply_layout(&bottle, &default_palette());
        assert_eq!(view.to_string(), "Red");
    }

    #[test]
    fn console_bottle_survives_an_unknown_index() {
        let mut view: ConsoleBottle = ConsoleBottle::new();
        view.apply_layout(&Bottle::filled(9, 1), &default_palette());
        assert_eq!(view.to_string(), "color 9");
    }

    #[test]
    fn show_level_with_missing_number_is_a_no_op() {
        let batch = LevelBatch {
            levels: vec![Level {
                level_number: 1,
                bottles: vec![Bottle::empty()],
            }],
        };
        // Must log and return, not panic.
        show_level(&batch, 99, &default_palette());
    }
}
