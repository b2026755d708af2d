use tracing::debug;

use crate::GameState;
use crate::engine::actions;
use crate::engine::error::TurnError;
use crate::engine::output::Output;
use crate::engine::resolver::{self, Match};
use crate::world::Direction;

/// Whether a command needs an argument; `help` annotates the ones that do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    None,
    Required,
}

pub struct Command {
    pub verb: &'static str,
    pub arity: Arity,
    pub run: fn(&mut GameState, &str) -> Result<Output, TurnError>,
}

/// Player-invocable commands, in the order `help` lists them.
pub const COMMANDS: &[Command] = &[
    Command {
        verb: "go",
        arity: Arity::Required,
        run: actions::go,
    },
    Command {
        verb: "get",
        arity: Arity::Required,
        run: actions::get,
    },
    Command {
        verb: "drop",
        arity: Arity::Required,
        run: actions::drop,
    },
    Command {
        verb: "look",
        arity: Arity::None,
        run: actions::look,
    },
    Command {
        verb: "inventory",
        arity: Arity::None,
        run: actions::inventory,
    },
    Command {
        verb: "unlock",
        arity: Arity::Required,
        run: actions::unlock,
    },
    Command {
        verb: "help",
        arity: Arity::None,
        run: actions::help,
    },
    Command {
        verb: "quit",
        arity: Arity::None,
        run: actions::quit,
    },
];

/// One turn: tokenize, resolve the verb, run the action. Verb resolution
/// precedence is fixed: direction alias table, then direction names, then
/// command verbs. Empty input is a no-op.
pub fn dispatch(state: &mut GameState, input: &str) -> Output {
    let mut tokens = input.split_whitespace();
    let Some(verb) = tokens.next() else {
        return Output::new();
    };

    let verb = verb.to_lowercase();
    let arg = tokens.collect::<Vec<_>>().join(" ").to_lowercase();

    debug!(%verb, %arg, "dispatching");

    let result = match resolver::resolve(&verb, &Direction::NAMES, Direction::ALIASES) {
        // Bare direction: implicit "go <direction>".
        Match::Exact(direction) => actions::go(state, direction),
        Match::Ambiguous(options) => Err(TurnError::AmbiguousInput {
            verb: "go",
            options: options.into_iter().map(String::from).collect(),
        }),
        Match::NoMatch => run_command(state, &verb, &arg),
    };

    match result {
        Ok(out) => out,
        Err(err) => {
            let mut out = Output::new();
            out.say(err.to_string());
            out
        }
    }
}

fn run_command(state: &mut GameState, verb: &str, arg: &str) -> Result<Output, TurnError> {
    let verbs: Vec<&str> = COMMANDS.iter().map(|c| c.verb).collect();

    match resolver::resolve(verb, &verbs, &[]) {
        Match::Exact(name) => match COMMANDS.iter().find(|c| c.verb == name) {
            Some(command) => (command.run)(state, arg),
            None => Err(TurnError::InvalidCommand),
        },
        Match::Ambiguous(options) => Err(TurnError::AmbiguousInput {
            verb: "do",
            options: options.into_iter().map(String::from).collect(),
        }),
        Match::NoMatch => Err(TurnError::InvalidCommand),
    }
}
