use crate::GameState;
use crate::engine::dispatch::{Arity, COMMANDS};
use crate::engine::error::TurnError;
use crate::engine::output::Output;
use crate::engine::resolver::{self, Match};
use crate::world::Direction;

pub fn go(state: &mut GameState, arg: &str) -> Result<Output, TurnError> {
    if arg.is_empty() {
        return Err(TurnError::MissingArgument {
            verb: "go",
            what: "somewhere",
        });
    }

    let (direction, target) = resolve_exit(state, "go", arg)?;

    // Exit targets are validated at load.
    let Some(next_room) = state.world.room(target) else {
        return Err(TurnError::NoSuchExit(direction.to_string()));
    };

    if let Some(lock) = &next_room.lock {
        return Err(TurnError::Locked {
            direction: direction.to_string(),
            requirement: lock.iter().map(|(item, count)| (item.clone(), *count)).collect(),
        });
    }

    state.current_room = target;

    let mut out = Output::new();
    out.say(format!("You go {direction}."));
    out.append(look(state, "")?);
    Ok(out)
}

pub fn look(state: &mut GameState, _arg: &str) -> Result<Output, TurnError> {
    let room = state.here();
    let mut out = Output::new();

    out.title(room.name.as_str());
    out.say(room.desc.as_str());

    if !room.items.is_empty() {
        out.say(format!("Items: {}", room.items.join(", ")));
    }

    let exits = room.exit_names();
    if exits.is_empty() {
        out.set_exits("Exits: (none)");
    } else {
        out.set_exits(format!("Exits: {}", exits.join(" ")));
    }

    Ok(out)
}

pub fn get(state: &mut GameState, arg: &str) -> Result<Output, TurnError> {
    if arg.is_empty() {
        return Err(TurnError::MissingArgument {
            verb: "get",
            what: "something",
        });
    }

    if state.here().items.is_empty() {
        return Err(TurnError::NoItemsHere);
    }

    let name = resolve_item(&state.here().items, "get", arg, TurnError::ItemNotFound)?;

    remove_one(&mut state.here_mut().items, &name);
    state.inventory.push(name.clone());

    let mut out = Output::new();
    out.say(format!("You pick up the {name}."));
    Ok(out)
}

pub fn drop(state: &mut GameState, arg: &str) -> Result<Output, TurnError> {
    if arg.is_empty() {
        return Err(TurnError::MissingArgument {
            verb: "drop",
            what: "something",
        });
    }

    let name = resolve_item(&state.inventory, "drop", arg, TurnError::ItemNotHeld)?;

    remove_one(&mut state.inventory, &name);
    state.here_mut().items.push(name.clone());

    let mut out = Output::new();
    out.say(format!("You drop the {name}."));
    Ok(out)
}

pub fn inventory(state: &mut GameState, _arg: &str) -> Result<Output, TurnError> {
    let mut out = Output::new();

    if state.inventory.is_empty() {
        out.say("You're not carrying anything.");
    } else {
        out.say("Inventory:");
        for item in &state.inventory {
            out.say(format!("  {item}"));
        }
    }

    Ok(out)
}

pub fn unlock(state: &mut GameState, arg: &str) -> Result<Output, TurnError> {
    if arg.is_empty() {
        return Err(TurnError::MissingArgument {
            verb: "unlock",
            what: "somewhere",
        });
    }

    let (direction, target) = resolve_exit(state, "unlock", arg)?;

    let Some(next_room) = state.world.room(target) else {
        return Err(TurnError::NoSuchExit(direction.to_string()));
    };
    let Some(lock) = &next_room.lock else {
        return Err(TurnError::NotLocked(direction.to_string()));
    };

    let requirement: Vec<(String, u32)> = lock
        .iter()
        .map(|(item, count)| (item.clone(), *count))
        .collect();

    // All-or-nothing: report every deficit, or consume the full multiset.
    let missing: Vec<(String, u32)> = requirement
        .iter()
        .filter_map(|(item, required)| {
            let held = state.inventory.iter().filter(|held| *held == item).count() as u32;
            let deficit = required.saturating_sub(held);
            (deficit > 0).then(|| (item.clone(), deficit))
        })
        .collect();

    if !missing.is_empty() {
        return Err(TurnError::InsufficientItems { missing });
    }

    for (item, required) in &requirement {
        let mut remaining = *required;
        state.inventory.retain(|held| {
            if remaining > 0 && held == item {
                remaining -= 1;
                false
            } else {
                true
            }
        });
    }

    if let Some(next_room) = state.world.rooms.get_mut(target) {
        next_room.lock = None;
    }

    let mut out = Output::new();
    out.say(format!("You unlock the way {direction}."));
    Ok(out)
}

pub fn quit(state: &mut GameState, _arg: &str) -> Result<Output, TurnError> {
    state.over = true;

    let mut out = Output::new();
    out.say("Goodbye!");
    Ok(out)
}

pub fn help(_state: &mut GameState, _arg: &str) -> Result<Output, TurnError> {
    let mut out = Output::new();

    for command in COMMANDS {
        match command.arity {
            Arity::Required => out.say(format!("{} ...", command.verb)),
            Arity::None => out.say(command.verb),
        }
    }

    Ok(out)
}

/// Resolve a direction argument against the current room's exits. Returns
/// the full direction name and the exit's target room index.
fn resolve_exit(
    state: &GameState,
    verb: &'static str,
    arg: &str,
) -> Result<(&'static str, usize), TurnError> {
    let names = state.here().exit_names();

    match resolver::resolve(arg, &names, Direction::ALIASES) {
        // An alias can expand to a direction this room doesn't have.
        Match::Exact(name) => match state.here().exit_named(name) {
            Some(exit) => Ok((name, exit.target)),
            None => Err(TurnError::NoSuchExit(name.to_string())),
        },
        Match::Ambiguous(options) => Err(TurnError::AmbiguousInput {
            verb,
            options: options.into_iter().map(String::from).collect(),
        }),
        Match::NoMatch => Err(TurnError::NoSuchExit(arg.to_string())),
    }
}

/// Resolve an item argument (one compound token) against a list of names.
fn resolve_item(
    names: &[String],
    verb: &'static str,
    arg: &str,
    not_found: fn(String) -> TurnError,
) -> Result<String, TurnError> {
    let candidates: Vec<&str> = names.iter().map(String::as_str).collect();

    match resolver::resolve(arg, &candidates, &[]) {
        Match::Exact(name) => Ok(name.to_string()),
        Match::Ambiguous(options) => Err(TurnError::AmbiguousInput {
            verb,
            options: options.into_iter().map(String::from).collect(),
        }),
        Match::NoMatch => Err(not_found(arg.to_string())),
    }
}

/// Remove the first occurrence of `name`, leaving any duplicates in place.
fn remove_one(items: &mut Vec<String>, name: &str) {
    if let Some(pos) = items.iter().position(|held| held == name) {
        items.remove(pos);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::world::{Exit, Room, World};

    fn room(name: &str, desc: &str) -> Room {
        Room {
            name: name.to_string(),
            desc: desc.to_string(),
            exits: Vec::new(),
            items: Vec::new(),
            lock: None,
        }
    }

    fn exit(direction: Direction, target: usize) -> Exit {
        Exit { direction, target }
    }

    /// Entrance (0) -north/northeast-> Gallery (1) -east-> Vault (2, locked).
    fn build_state() -> GameState {
        let mut entrance = room("Entrance", "A narrow opening.");
        entrance.items = vec![
            "torch".to_string(),
            "torn map".to_string(),
            "coin".to_string(),
            "coin".to_string(),
        ];
        entrance.exits.push(exit(Direction::North, 1));
        entrance.exits.push(exit(Direction::Northeast, 1));

        let mut gallery = room("Gallery", "A dark cave.");
        gallery.exits.push(exit(Direction::South, 0));
        gallery.exits.push(exit(Direction::East, 2));

        let mut vault = room("Vault", "Shelves of dust behind iron bars.");
        vault.lock = Some(BTreeMap::from([
            ("rusty key".to_string(), 1),
            ("coin".to_string(), 2),
        ]));
        vault.exits.push(exit(Direction::West, 1));

        GameState::new(World {
            rooms: vec![entrance, gallery, vault],
        })
    }

    #[test]
    fn go_requires_a_direction() {
        let mut state = build_state();
        assert_eq!(
            go(&mut state, ""),
            Err(TurnError::MissingArgument {
                verb: "go",
                what: "somewhere"
            })
        );
    }

    #[test]
    fn go_rejects_absent_exits_and_stays_put() {
        let mut state = build_state();

        for dir in ["west", "south", "east", "southwest"] {
            assert_eq!(
                go(&mut state, dir),
                Err(TurnError::NoSuchExit(dir.to_string()))
            );
            assert_eq!(state.current_room, 0);
        }
    }

    #[test]
    fn go_expands_alias_before_reporting_absent_exit() {
        let mut state = build_state();
        assert_eq!(
            go(&mut state, "s"),
            Err(TurnError::NoSuchExit("south".to_string()))
        );
    }

    #[test]
    fn go_moves_and_looks() {
        let mut state = build_state();
        let out = go(&mut state, "north").expect("move succeeds");
        let lines = out.lines();

        assert_eq!(state.current_room, 1);
        assert_eq!(lines[0], "You go north.");
        assert_eq!(lines[1], "> Gallery");
        assert_eq!(lines[2], "A dark cave.");
        assert_eq!(lines.last().map(String::as_str), Some("Exits: south east"));
    }

    #[test]
    fn go_resolves_abbreviations_against_exits() {
        let mut state = build_state();
        state.current_room = 1;

        assert!(go(&mut state, "so").is_ok());
        assert_eq!(state.current_room, 0);

        // "ne" is an alias hit, never an ambiguity with "north".
        assert!(go(&mut state, "ne").is_ok());
        assert_eq!(state.current_room, 1);
    }

    #[test]
    fn go_with_shared_prefix_is_ambiguous() {
        let mut state = build_state();
        assert_eq!(
            go(&mut state, "no"),
            Err(TurnError::AmbiguousInput {
                verb: "go",
                options: vec!["north".to_string(), "northeast".to_string()],
            })
        );
        assert_eq!(state.current_room, 0);
    }

    #[test]
    fn go_into_locked_room_reports_requirement() {
        let mut state = build_state();
        state.current_room = 1;

        assert_eq!(
            go(&mut state, "east"),
            Err(TurnError::Locked {
                direction: "east".to_string(),
                requirement: vec![("coin".to_string(), 2), ("rusty key".to_string(), 1)],
            })
        );
        assert_eq!(state.current_room, 1);
    }

    #[test]
    fn get_requires_an_item() {
        let mut state = build_state();
        assert_eq!(
            get(&mut state, ""),
            Err(TurnError::MissingArgument {
                verb: "get",
                what: "something"
            })
        );
    }

    #[test]
    fn get_in_an_empty_room() {
        let mut state = build_state();
        state.current_room = 1;
        assert_eq!(get(&mut state, "key"), Err(TurnError::NoItemsHere));
    }

    #[test]
    fn get_unknown_item() {
        let mut state = build_state();
        assert_eq!(
            get(&mut state, "lantern"),
            Err(TurnError::ItemNotFound("lantern".to_string()))
        );
        assert!(state.inventory.is_empty());
    }

    #[test]
    fn get_with_shared_prefix_is_ambiguous() {
        let mut state = build_state();
        let before = state.here().items.clone();

        assert_eq!(
            get(&mut state, "tor"),
            Err(TurnError::AmbiguousInput {
                verb: "get",
                options: vec!["torch".to_string(), "torn map".to_string()],
            })
        );
        assert_eq!(state.here().items, before);
        assert!(state.inventory.is_empty());
    }

    #[test]
    fn get_moves_exactly_one_unit() {
        let mut state = build_state();
        let out = get(&mut state, "coin").expect("get succeeds");

        assert_eq!(out.lines(), vec!["You pick up the coin."]);
        assert_eq!(state.inventory, vec!["coin"]);
        // One of the two coins is still in the room.
        assert_eq!(
            state.here().items,
            vec!["torch", "torn map", "coin"]
        );
    }

    #[test]
    fn get_matches_compound_item_names() {
        let mut state = build_state();
        assert!(get(&mut state, "torn m").is_ok());
        assert_eq!(state.inventory, vec!["torn map"]);
    }

    #[test]
    fn drop_requires_holding_the_item() {
        let mut state = build_state();
        assert_eq!(
            drop(&mut state, "torch"),
            Err(TurnError::ItemNotHeld("torch".to_string()))
        );
    }

    #[test]
    fn get_then_drop_restores_the_room() {
        let mut state = build_state();
        let mut before = state.here().items.clone();
        before.sort();

        get(&mut state, "torch").expect("get succeeds");
        drop(&mut state, "torch").expect("drop succeeds");

        let mut after = state.here().items.clone();
        after.sort();
        assert_eq!(after, before);
        assert!(state.inventory.is_empty());
    }

    #[test]
    fn inventory_when_empty() {
        let mut state = build_state();
        let out = inventory(&mut state, "").expect("inventory never fails");
        assert_eq!(out.lines(), vec!["You're not carrying anything."]);
    }

    #[test]
    fn inventory_lists_duplicates_individually() {
        let mut state = build_state();
        get(&mut state, "coin").expect("first coin");
        get(&mut state, "coin").expect("second coin");

        let out = inventory(&mut state, "").expect("inventory never fails");
        assert_eq!(out.lines(), vec!["Inventory:", "  coin", "  coin"]);
    }

    #[test]
    fn unlock_needs_a_locked_exit() {
        let mut state = build_state();
        assert_eq!(
            unlock(&mut state, "west"),
            Err(TurnError::NoSuchExit("west".to_string()))
        );
        assert_eq!(
            unlock(&mut state, "north"),
            Err(TurnError::NotLocked("north".to_string()))
        );
    }

    #[test]
    fn unlock_reports_deficits_and_consumes_nothing() {
        let mut state = build_state();
        state.current_room = 1;
        state.inventory = vec!["coin".to_string()];

        assert_eq!(
            unlock(&mut state, "east"),
            Err(TurnError::InsufficientItems {
                missing: vec![("coin".to_string(), 1), ("rusty key".to_string(), 1)],
            })
        );
        assert_eq!(state.inventory, vec!["coin"]);
        assert!(state.world.rooms[2].lock.is_some());
    }

    #[test]
    fn unlock_with_no_relevant_items_reports_full_requirement() {
        let mut state = build_state();
        state.current_room = 1;

        assert_eq!(
            unlock(&mut state, "east"),
            Err(TurnError::InsufficientItems {
                missing: vec![("coin".to_string(), 2), ("rusty key".to_string(), 1)],
            })
        );
    }

    #[test]
    fn unlock_consumes_the_exact_multiset() {
        let mut state = build_state();
        state.current_room = 1;
        state.inventory = vec![
            "coin".to_string(),
            "rusty key".to_string(),
            "coin".to_string(),
            "feather".to_string(),
        ];

        let out = unlock(&mut state, "east").expect("unlock succeeds");
        assert_eq!(out.lines(), vec!["You unlock the way east."]);
        assert_eq!(state.inventory, vec!["feather"]);
        assert!(state.world.rooms[2].lock.is_none());

        // The way is open now.
        assert!(go(&mut state, "east").is_ok());
        assert_eq!(state.current_room, 2);
    }

    #[test]
    fn quit_flags_termination() {
        let mut state = build_state();
        let out = quit(&mut state, "").expect("quit never fails");

        assert!(state.over);
        assert_eq!(out.lines(), vec!["Goodbye!"]);
    }

    #[test]
    fn help_annotates_argument_commands() {
        let mut state = build_state();
        let out = help(&mut state, "").expect("help never fails");

        assert_eq!(
            out.lines(),
            vec![
                "go ...",
                "get ...",
                "drop ...",
                "look",
                "inventory",
                "unlock ...",
                "help",
                "quit",
            ]
        );
    }
}
