//! JSONL (JSON Lines) snapshot files.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};

use super::{StorageConfig, StorageError};
use crate::club::MemoryStore;
use crate::models::{Availability, Match, Player, Rating};

/// Entity types with their own snapshot file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Player,
    Match,
    Availability,
    Rating,
}

impl EntityType {
    /// Get the filename for this entity type.
    pub fn filename(&self) -> &'static str {
        match self {
            EntityType::Player => "players.jsonl",
            EntityType::Match => "matches.jsonl",
            EntityType::Availability => "availability.jsonl",
            EntityType::Rating => "ratings.jsonl",
        }
    }
}

/// JSONL file writer.
pub struct JsonlWriter<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Serialize> JsonlWriter<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    pub fn for_entity(config: &StorageConfig, entity: EntityType) -> Self {
        Self::new(config.entity_path(entity))
    }

    fn ensure_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Write entities, replacing the entire file.
    pub fn write_all(&self, entities: &[T]) -> Result<usize, StorageError> {
        self.ensure_dir()?;

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        let mut count = 0;

        for entity in entities {
            let json = serde_json::to_string(entity)?;
            writeln!(writer, "{}", json)?;
            count += 1;
        }

        writer.flush()?;
        debug!("Wrote {} entities to {:?}", count, self.path);

        Ok(count)
    }
}

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    pub fn for_entity(config: &StorageConfig, entity: EntityType) -> Self {
        Self::new(config.entity_path(entity))
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read all entities, skipping unparseable lines with a warning.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut entities = Vec::new();
        let mut line_num = 0;

        for line in reader.lines() {
            line_num += 1;
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(entity) => entities.push(entity),
                Err(e) => {
                    warn!(
                        "Failed to parse line {} in {:?}: {}",
                        line_num, self.path, e
                    );
                }
            }
        }

        debug!("Read {} entities from {:?}", entities.len(), self.path);
        Ok(entities)
    }
}

/// Load a full store snapshot from the data directory. Missing files read
/// as empty collections, so a fresh data directory yields an empty club.
pub fn load_store(config: &StorageConfig) -> Result<MemoryStore, StorageError> {
    let players: Vec<Player> = JsonlReader::for_entity(config, EntityType::Player).read_all()?;
    let matches: Vec<Match> = JsonlReader::for_entity(config, EntityType::Match).read_all()?;
    let availabilities: Vec<Availability> =
        JsonlReader::for_entity(config, EntityType::Availability).read_all()?;
    let ratings: Vec<Rating> = JsonlReader::for_entity(config, EntityType::Rating).read_all()?;

    info!(
        "Loaded snapshot: {} players, {} matches, {} availability records, {} ratings",
        players.len(),
        matches.len(),
        availabilities.len(),
        ratings.len()
    );

    Ok(MemoryStore::from_parts(
        players,
        matches,
        availabilities,
        ratings,
    ))
}

/// Write a full store snapshot to the data directory.
pub fn save_store(config: &StorageConfig, store: &MemoryStore) -> Result<(), StorageError> {
    let (players, matches, availabilities, ratings) = store.parts();

    JsonlWriter::for_entity(config, EntityType::Player).write_all(players)?;
    JsonlWriter::for_entity(config, EntityType::Match).write_all(matches)?;
    JsonlWriter::for_entity(config, EntityType::Availability).write_all(availabilities)?;
    JsonlWriter::for_entity(config, EntityType::Rating).write_all(ratings)?;

    info!(
        "Saved snapshot: {} players, {} matches, {} availability records, {} ratings",
        players.len(),
        matches.len(),
        availabilities.len(),
        ratings.len()
    );
    Ok(())
}
