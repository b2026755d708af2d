use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use wayfarer::engine::Output;
use wayfarer::{GameState, load_world_from_file};

fn flush_output(out: &Output) {
    for line in out.lines() {
        println!("{line}");
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let world_path: PathBuf = match env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => {
            eprintln!("Usage: wayfarer <world-file>");
            std::process::exit(2);
        }
    };

    let world = match load_world_from_file(&world_path) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Failed to load world file '{}': {e}", world_path.display());
            std::process::exit(1);
        }
    };

    let mut state = GameState::new(world);
    flush_output(&state.initialize());

    let stdin = io::stdin();
    let mut saw_eof = false;

    loop {
        print!("What would you like to do? ");
        io::stdout().flush()?;

        let mut input = String::new();
        let bytes_read = stdin.read_line(&mut input)?;
        if bytes_read == 0 {
            // A closed stdin reports end-of-input forever; two in a row
            // means nobody is left typing.
            if saw_eof {
                break;
            }
            saw_eof = true;
            println!();
            println!("Use 'quit' to exit.");
            continue;
        }
        saw_eof = false;

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        flush_output(&state.step(input));

        if state.is_over() {
            break;
        }
    }

    Ok(())
}
