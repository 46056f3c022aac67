/*
config.rs

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

//! Application constants.

/// Application identifier. Used for the per-user data directory.
pub const APP_NAME: &str = "poursort";

/// Name of the level batch file in the data directories.
pub const LEVEL_FILE_NAME: &str = "levels.json";

/// Directory with the read-only level batch shipped with the game assets.
/// Used as a fallback when there is no file in the per-user data directory.
pub const BUNDLED_DATA_DIR: &str = "data";

/// Notice displayed by the `--version` option.
pub const COPYRIGHT_NOTICE: &str = "poursort 0.1.0
Copyright 2026 The Poursort Authors
License GPL-3.0-or-later: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";
