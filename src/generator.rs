/*
generator.rs

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

//! Generate random color-sorting levels.
//!
//! A level is an ordered list of bottles, each holding up to four stacked
//! color layers ([`bottle::Bottle`]). The [`levels::LevelBuilder`] object
//! distributes a configured number of layer units per color into bottles,
//! appends the configured empty bottles, and shuffles the result. One level is
//! built for each number in the configured range, and the levels are grouped
//! in a [`level::LevelBatch`].
//!
//! The generation parameters are described by a
//! [`settings::GenerationSettings`] object. The settings are validated before
//! any level is produced: an invalid configuration is reported as a
//! [`settings::SettingsError`], never as a partially generated batch.
//!
//! Generation takes the random source as an explicit argument so that callers
//! can pass a seeded generator and get reproducible batches:
//!
//! ```ignore
//! let builder = levels::LevelBuilder::new(settings)?;
//! let batch = builder.generate(&mut rand::rng());
//! ```

pub mod bottle;
pub mod level;
pub mod levels;
pub mod settings;
