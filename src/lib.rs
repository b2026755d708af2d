pub mod engine;
pub mod world;

use engine::Output;
use world::{Room, World};

pub use world::{WorldLoadError, load_world_from_file, load_world_from_str};

/// Whole-session state: the world graph plus the player's position,
/// inventory, and termination flag. Owned by the session loop and passed by
/// reference into the dispatcher and handlers each turn.
pub struct GameState {
    pub world: World,
    pub current_room: usize,
    pub inventory: Vec<String>,
    pub over: bool,
}

impl GameState {
    pub fn new(world: World) -> Self {
        GameState {
            world,
            current_room: 0,
            inventory: Vec::new(),
            over: false,
        }
    }

    /// The room the player is standing in. `current_room` only ever holds
    /// indexes that were validated at load or came from a validated exit.
    pub fn here(&self) -> &Room {
        &self.world.rooms[self.current_room]
    }

    pub(crate) fn here_mut(&mut self) -> &mut Room {
        &mut self.world.rooms[self.current_room]
    }

    /// Initial render of the starting room.
    pub fn initialize(&mut self) -> Output {
        self.step("look")
    }

    /// Process one line of player input and return the turn's output.
    pub fn step(&mut self, input: &str) -> Output {
        engine::dispatch(self, input)
    }

    pub fn is_over(&self) -> bool {
        self.over
    }
}
