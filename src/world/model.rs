use std::collections::BTreeMap;
use std::fmt;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Runtime world type used by the game loop. Room indexes are positional:
/// the first room record in the data file is index 0, the starting room.
#[derive(Debug, Clone)]
pub struct World {
    pub rooms: Vec<Room>,
}

impl World {
    pub fn room(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }
}

#[derive(Debug, Clone)]
pub struct Room {
    pub name: String,
    pub desc: String,
    pub exits: Vec<Exit>,
    /// Items lying in the room, in file order. Duplicates allowed.
    pub items: Vec<String>,
    /// Item name -> required count. Present while the room is locked;
    /// cleared in place by a successful unlock.
    pub lock: Option<BTreeMap<String, u32>>,
}

impl Room {
    pub fn exit_named(&self, direction: &str) -> Option<&Exit> {
        self.exits.iter().find(|e| e.direction.name() == direction)
    }

    /// Exit direction names in file order.
    pub fn exit_names(&self) -> Vec<&'static str> {
        self.exits.iter().map(|e| e.direction.name()).collect()
    }
}

#[derive(Debug, Clone)]
pub struct Exit {
    pub direction: Direction,
    pub target: usize,
}

/// The eight compass directions an exit can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Northeast,
    Southeast,
    Southwest,
    Northwest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Northeast,
        Direction::Southeast,
        Direction::Southwest,
        Direction::Northwest,
    ];

    /// Full direction names, same order as `ALL`.
    pub const NAMES: [&'static str; 8] = [
        "north",
        "south",
        "east",
        "west",
        "northeast",
        "southeast",
        "southwest",
        "northwest",
    ];

    /// Short alias -> full name. The resolver checks this table before any
    /// prefix matching, so "n" always means north even though it would
    /// prefix-match northeast and northwest too.
    pub const ALIASES: &'static [(&'static str, &'static str)] = &[
        ("n", "north"),
        ("s", "south"),
        ("e", "east"),
        ("w", "west"),
        ("ne", "northeast"),
        ("se", "southeast"),
        ("sw", "southwest"),
        ("nw", "northwest"),
    ];

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Northeast => "northeast",
            Direction::Southeast => "southeast",
            Direction::Southwest => "southwest",
            Direction::Northwest => "northwest",
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            Direction::North => "n",
            Direction::South => "s",
            Direction::East => "e",
            Direction::West => "w",
            Direction::Northeast => "ne",
            Direction::Southeast => "se",
            Direction::Southwest => "sw",
            Direction::Northwest => "nw",
        }
    }

    /// Parse a full direction name, case-insensitively. Aliases are the
    /// resolver's job, not this function's.
    pub fn parse(s: &str) -> Option<Direction> {
        Direction::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
