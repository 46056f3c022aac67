/*
cli_options.rs

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

//! Process command-line options.
//!
//! Poursort is a content-build tool: it generates a batch of color-sorting
//! levels and writes it to a JSON file that the game loads at run time. The
//! same tool reads such a file back to list its levels or to print a preview
//! of one of them.
//!
//! # Examples
//!
//! Generate levels 1 to 10 with the default bottle configuration:
//!
//! ```text
//! $ poursort --generate
//! Generated 10 levels in "~/.local/share/poursort/levels.json"
//! ```
//!
//! Generate a harder batch into the game assets:
//!
//! ```text
//! $ poursort --generate --start-level 11 --end-level 30 \
//!     --bottles 7 --empty 2 --colors 8,8,4,4 --output data/levels.json
//! ```
//!
//! Preview one level from a batch:
//!
//! ```text
//! $ poursort --show 3 --file data/levels.json
//! Level 3 (7 bottles)
//!   bottle 0: Red | Red | Red
//!   bottle 1: (empty)
//!   ...
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::path::PathBuf;

use crate::config;
use crate::generator::level::LevelBatch;
use crate::generator::levels::LevelBuilder;
use crate::generator::settings::GenerationSettings;
use crate::palette;
use crate::render;
use crate::saver::levels::SaverLevels;

/// Generate and inspect color-sorting levels.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = config::COPYRIGHT_NOTICE)]
struct Args {
    /// Generate a batch of levels and save it
    #[arg(short, long, default_value_t = false)]
    generate: bool,

    /// Number of the first level to generate
    #[arg(long, value_name = "NUM", default_value_t = 1)]
    start_level: u32,

    /// Number of the last level to generate (inclusive)
    #[arg(long, value_name = "NUM", default_value_t = 10)]
    end_level: u32,

    /// Number of bottles in each level, empty bottles included
    #[arg(short, long, value_name = "NUM", default_value_t = 4)]
    bottles: usize,

    /// Number of empty bottles in each level
    #[arg(short, long, value_name = "NUM", default_value_t = 1)]
    empty: usize,

    /// Layer units to distribute for each palette color
    #[arg(
        short,
        long,
        value_name = "NUM,NUM,...",
        value_delimiter = ',',
        default_values_t = [4u32, 4, 4]
    )]
    colors: Vec<u32>,

    /// Destination file for the generated batch (defaults to the user data file)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// List the levels stored in a level file
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Print a preview of the given level from a level file
    #[arg(short, long, value_name = "NUM")]
    show: Option<u32>,

    /// Level file to read (defaults to the user data file, then the bundled file)
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process the command-line options.
///
/// Return the process exit code: 0 on success, 1 when an error was reported.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    if args.generate {
        return generate(&args);
    }
    if args.ls || args.show.is_some() {
        return inspect(&args);
    }

    eprintln!("Nothing to do. Use --generate, --ls, or --show (see --help).");
    1
}

/// Generate a batch from the command-line settings and save it.
fn generate(args: &Args) -> u8 {
    let settings = GenerationSettings {
        start_level: args.start_level,
        end_level: args.end_level,
        total_bottles: args.bottles,
        empty_bottles: args.empty,
        color_counts: args.colors.clone(),
    };

    let builder: LevelBuilder = match LevelBuilder::new(settings) {
        Ok(builder) => builder,
        Err(error) => {
            eprintln!("Error: {error}");
            return 1;
        }
    };
    let batch: LevelBatch = builder.generate(&mut rand::rng());

    let saver: SaverLevels = match &args.output {
        Some(path) => SaverLevels::new(path.clone()),
        None => SaverLevels::in_dir(user_data_dir()),
    };
    match saver.save_levels(&batch) {
        Ok(()) => {
            println!("Generated {} levels in {:?}", batch.len(), saver.path());
            0
        }
        Err(error) => {
            eprintln!("Error: {error}");
            1
        }
    }
}

/// List or preview levels from a saved batch.
fn inspect(args: &Args) -> u8 {
    let saver: SaverLevels = level_file(args);
    let batch: LevelBatch = match saver.load_levels() {
        Ok(batch) => batch,
        Err(error) => {
            eprintln!("Error: {error}");
            return 1;
        }
    };

    if args.ls {
        for level in &batch.levels {
            println!(
                "Level {} ({} bottles)",
                level.level_number,
                level.bottles.len()
            );
        }
    }

    if let Some(level_number) = args.show {
        let palette: Vec<palette::PaletteColor> = palette::default_palette();
        // A missing level is logged and skipped; it is not a process error.
        render::show_level(&batch, level_number, &palette);
    }
    0
}

/// Return the saver for the level file to read.
///
/// Without an explicit `--file`, the writable per-user data file is tried
/// first, and the read-only file bundled with the game assets is the
/// fallback.
fn level_file(args: &Args) -> SaverLevels {
    if let Some(path) = &args.file {
        return SaverLevels::new(path.clone());
    }

    let user: SaverLevels = SaverLevels::in_dir(user_data_dir());
    if user.path().exists() {
        return user;
    }
    debug!("No user level file, falling back to the bundled file");
    SaverLevels::in_dir(PathBuf::from(config::BUNDLED_DATA_DIR))
}

/// Return the per-user data directory for Poursort.
fn user_data_dir() -> PathBuf {
    let mut dir: PathBuf = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    dir.push(config::APP_NAME);
    dir
}
