use std::collections::HashSet;

use super::model::World;

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Sweep the whole world and collect every integrity error rather than
/// stopping at the first one.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    for (index, room) in world.rooms.iter().enumerate() {
        let mut seen_directions: HashSet<&str> = HashSet::new();

        for exit in &room.exits {
            if exit.target >= world.rooms.len() {
                errors.push(ValidationError::new(format!(
                    "room {} ('{}') exit {} targets missing room {}",
                    index,
                    room.name,
                    exit.direction,
                    exit.target
                )));
            }

            if !seen_directions.insert(exit.direction.name()) {
                errors.push(ValidationError::new(format!(
                    "room {} ('{}') has a duplicate exit {}",
                    index, room.name, exit.direction
                )));
            }
        }

        for item in &room.items {
            if item.trim().is_empty() {
                errors.push(ValidationError::new(format!(
                    "room {} ('{}') has an empty item name",
                    index, room.name
                )));
            }
        }

        if let Some(lock) = &room.lock {
            if lock.is_empty() {
                errors.push(ValidationError::new(format!(
                    "room {} ('{}') has a lock that requires nothing",
                    index, room.name
                )));
            }

            for (item, count) in lock {
                if item.trim().is_empty() {
                    errors.push(ValidationError::new(format!(
                        "room {} ('{}') lock has an empty item name",
                        index, room.name
                    )));
                }
                if *count == 0 {
                    errors.push(ValidationError::new(format!(
                        "room {} ('{}') lock requires zero of '{}'",
                        index, room.name, item
                    )));
                }
            }
        }
    }

    errors
}
