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

//! Save and restore a level batch as a JSON file.
//!
//! The file is a pretty-printed UTF-8 JSON document so that it can be checked
//! in with the game assets and diffed between generation runs. Loading a
//! batch back reproduces it field for field; the saver never returns a
//! partial batch.

use log::debug;
use std::error::Error;
use std::fmt;
use std::fs::{File, create_dir_all};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config;
use crate::generator::level::LevelBatch;

/// Type of errors when saving or loading a level batch.
#[derive(Debug)]
pub enum SaverError {
    /// The level file does not exist.
    NotFound(PathBuf),

    /// The level file cannot be read or written.
    Io(std::io::Error),

    /// The level file content does not match the expected document shape.
    Parse(serde_json::Error),
}

impl fmt::Display for SaverError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SaverError::NotFound(path) => {
                write!(f, "level file not found: {}", path.display())
            }
            SaverError::Io(error) => write!(f, "cannot access the level file: {error}"),
            SaverError::Parse(error) => write!(f, "malformed level file: {error}"),
        }
    }
}

impl Error for SaverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SaverError::NotFound(_) => None,
            SaverError::Io(error) => Some(error),
            SaverError::Parse(error) => Some(error),
        }
    }
}

/// Object to save and restore a level batch.
pub struct SaverLevels {
    /// Path to the level file.
    save_file: PathBuf,
}

impl SaverLevels {
    /// Create a [`SaverLevels`] object for the given level file path.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Level file: {save_file:?}");
        Self { save_file }
    }

    /// Create a [`SaverLevels`] object for the standard level file in the
    /// provided data directory.
    pub fn in_dir(mut data_dir: PathBuf) -> Self {
        data_dir.push(config::LEVEL_FILE_NAME);
        Self::new(data_dir)
    }

    /// Return the path to the level file.
    pub fn path(&self) -> &Path {
        &self.save_file
    }

    /// Save the provided [`LevelBatch`] object.
    ///
    /// Missing parent directories are created, and an existing file is
    /// overwritten.
    ///
    /// # Errors
    ///
    /// The method returns a [`SaverError::Io`] error when the directory
    /// cannot be created or the file cannot be written.
    pub fn save_levels(&self, batch: &LevelBatch) -> Result<(), SaverError> {
        if let Some(dir) = self.save_file.parent() {
            if !dir.as_os_str().is_empty() {
                create_dir_all(dir).map_err(SaverError::Io)?;
            }
        }

        let file: File = File::create(&self.save_file).map_err(SaverError::Io)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, batch)
            .map_err(|error| SaverError::Io(std::io::Error::other(error)))?;
        writer.flush().map_err(SaverError::Io)?;
        Ok(())
    }

    /// Retrieve the [`LevelBatch`] object from the level file.
    ///
    /// # Errors
    ///
    /// The method returns a [`SaverError::NotFound`] error when the file
    /// does not exist, and a [`SaverError::Parse`] error when the content
    /// does not match the expected document shape. No partial batch is ever
    /// returned.
    pub fn load_levels(&self) -> Result<LevelBatch, SaverError> {
        let file: File;
        match File::open(&self.save_file) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => {
                    return Err(SaverError::NotFound(self.save_file.clone()));
                }
                _ => return Err(SaverError::Io(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let batch: LevelBatch = serde_json::from_reader(reader).map_err(SaverError::Parse)?;
        debug!("Loaded {} levels from {:?}", batch.len(), self.save_file);
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::bottle::Bottle;
    use crate::generator::level::Level;
    use std::fs;
    use tempfile::TempDir;

    fn batch() -> LevelBatch {
        LevelBatch {
            levels: vec![
                Level {
                    level_number: 1,
                    bottles: vec![
                        Bottle::filled(0, 4),
                        Bottle::filled(1, 2),
                        Bottle::filled(1, 2),
                        Bottle::empty(),
                    ],
                },
                Level {
                    level_number: 2,
                    bottles: vec![Bottle::filled(3, 1), Bottle::empty(), Bottle::empty()],
                },
            ],
        }
    }

    #[test]
    fn round_trip() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let saver = SaverLevels::in_dir(dir.path().to_path_buf());

        let original: LevelBatch = batch();
        saver.save_levels(&original).unwrap();
        let loaded: LevelBatch = saver.load_levels().unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let saver = SaverLevels::new(dir.path().join("nested").join("dir").join("levels.json"));

        saver.save_levels(&batch()).unwrap();
        assert_eq!(saver.load_levels().unwrap(), batch());
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let saver = SaverLevels::in_dir(dir.path().to_path_buf());

        saver.save_levels(&batch()).unwrap();
        let single = LevelBatch {
            levels: vec![Level {
                level_number: 9,
                bottles: vec![Bottle::empty()],
            }],
        };
        saver.save_levels(&single).unwrap();
        assert_eq!(saver.load_levels().unwrap(), single);
    }

    #[test]
    fn file_is_pretty_printed_with_stable_names() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let saver = SaverLevels::in_dir(dir.path().to_path_buf());

        saver.save_levels(&batch()).unwrap();
        let content: String = fs::read_to_string(saver.path()).unwrap();
        assert!(content.contains("\n"));
        assert!(content.contains("\"levels\""));
        assert!(content.contains("\"levelNumber\""));
        assert!(content.contains("\"bottles\""));
        assert!(content.contains("\"colorCount\""));
        assert!(content.contains("\"colorIndices\""));
    }

    #[test]
    fn empty_bottles_keep_their_four_slots() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let saver = SaverLevels::in_dir(dir.path().to_path_buf());

        let original = LevelBatch {
            levels: vec![Level {
                level_number: 1,
                bottles: vec![Bottle::empty()],
            }],
        };
        saver.save_levels(&original).unwrap();

        let content: String = fs::read_to_string(saver.path()).unwrap();
        let compact: String = content.split_whitespace().collect();
        assert!(compact.contains(r#""colorIndices":[0,0,0,0]"#));
        assert_eq!(saver.load_levels().unwrap(), original);
    }

    #[test]
    fn load_missing_file() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let saver = SaverLevels::in_dir(dir.path().to_path_buf());

        match saver.load_levels() {
            Err(SaverError::NotFound(path)) => assert_eq!(path, saver.path()),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn load_malformed_file() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let saver = SaverLevels::in_dir(dir.path().to_path_buf());

        fs::write(saver.path(), "{ \"levels\": 12 }").unwrap();
        assert!(matches!(saver.load_levels(), Err(SaverError::Parse(_))));
    }

    #[test]
    fn load_rejects_out_of_range_layer_count() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let saver = SaverLevels::in_dir(dir.path().to_path_buf());

        let content = r#"{"levels":[{"levelNumber":1,"bottles":[{"colorCount":7,"colorIndices":[0,0,0,0]}]}]}"#;
        fs::write(saver.path(), content).unwrap();
        assert!(matches!(saver.load_levels(), Err(SaverError::Parse(_))));
    }
}
