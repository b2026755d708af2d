mod loader;
mod model;
mod validator;

pub use loader::{WorldLoadError, load_world_from_file, load_world_from_str};
pub use model::{Direction, Exit, Room, World};
pub use validator::{ValidationError, validate_world};
