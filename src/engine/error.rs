use thiserror::Error;

/// A failed turn. Every variant is recoverable: its message prints and the
/// session loop re-prompts. Game state is never changed on the error path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("Sorry, you need to '{verb}' {what}.")]
    MissingArgument {
        verb: &'static str,
        what: &'static str,
    },

    #[error("There's no way to go {0}.")]
    NoSuchExit(String),

    #[error("The way {} is locked. Unlocking it requires: {}.", .direction, format_counts(.requirement))]
    Locked {
        direction: String,
        requirement: Vec<(String, u32)>,
    },

    #[error("There are no items to get in this room.")]
    NoItemsHere,

    #[error("There's no {0} to get.")]
    ItemNotFound(String),

    #[error("There's no {0} to drop.")]
    ItemNotHeld(String),

    #[error("The way {0} isn't locked.")]
    NotLocked(String),

    #[error("You can't unlock it yet. You still need: {}.", format_counts(.missing))]
    InsufficientItems { missing: Vec<(String, u32)> },

    #[error("Did you want to {} {}?", .verb, .options.join(" or "))]
    AmbiguousInput {
        verb: &'static str,
        options: Vec<String>,
    },

    #[error("Invalid command.")]
    InvalidCommand,
}

fn format_counts(counts: &[(String, u32)]) -> String {
    counts
        .iter()
        .map(|(item, count)| format!("{item}: {count}"))
        .collect::<Vec<_>>()
        .join(", ")
}
