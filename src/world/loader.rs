use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::model::{Direction, Exit, Room, World};
use super::validator::{ValidationError, validate_world};

/// Fatal at startup only; every gameplay error lives in `engine::TurnError`.
#[derive(Debug, Error)]
pub enum WorldLoadError {
    #[error("failed to read world file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse world file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid world: {}", format_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
struct RoomConfig {
    name: String,

    #[serde(default)]
    desc: String,

    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]

    #[serde(default)]
    items: Vec<String>,

    /// [room.locked] table: item name -> required count.
    #[serde(default)]
    locked: Option<BTreeMap<String, u32>>,
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: usize,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Public API: load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, WorldLoadError> {
    debug!(path = %path.display(), "loading world file");
    let contents = fs::read_to_string(path)?;
    load_world_from_str(&contents)
}

/// Public API: load a world from TOML text. The first `[[room]]` block is
/// room index 0, the starting room.
pub fn load_world_from_str(contents: &str) -> Result<World, WorldLoadError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    let mut errors: Vec<ValidationError> = Vec::new();
    let mut rooms: Vec<Room> = Vec::with_capacity(world_file.room.len());

    for (index, room_cfg) in world_file.room.into_iter().enumerate() {
        let mut exits = Vec::with_capacity(room_cfg.exit.len());

        for exit_cfg in room_cfg.exit {
            match Direction::parse(&exit_cfg.direction) {
                Some(direction) => exits.push(Exit {
                    direction,
                    target: exit_cfg.target,
                }),
                None => errors.push(ValidationError::new(format!(
                    "room {} ('{}') exit direction '{}' is not a compass direction",
                    index, room_cfg.name, exit_cfg.direction
                ))),
            }
        }

        rooms.push(Room {
            name: room_cfg.name,
            desc: normalize_multiline_desc(&room_cfg.desc),
            exits,
            items: room_cfg.items,
            lock: room_cfg.locked,
        });
    }

    let world = World { rooms };

    errors.extend(validate_world(&world));
    if !errors.is_empty() {
        return Err(WorldLoadError::Invalid(errors));
    }

    debug!(rooms = world.rooms.len(), "world loaded");
    Ok(world)
}

fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;
    let mut first_text_seen = false;

    for line in raw.lines() {
        // Strip all leading/trailing whitespace so indentation in TOML
        // doesn't affect what the player sees.
        let trimmed = line.trim();

        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !first_text_seen {
            result.push_str(trimmed);
            first_text_seen = true;
        } else {
            match pending_blank_lines {
                // Wrapped line: single newline in TOML -> space in output
                0 => result.push(' '),
                // One blank line -> one visible newline
                1 => result.push('\n'),
                // Two or more blank lines -> paragraph break
                _ => result.push_str("\n\n"),
            }
            result.push_str(trimmed);
        }

        pending_blank_lines = 0;
    }

    result
}
