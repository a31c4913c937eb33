/// Print a generated maze as text
///
/// Usage: maze_dump <n> [seed] [lights]
use lumaze::{Grid, WallCatalog, WallState};
use std::env;
use std::process;

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} <n> [seed] [lights]", program);
    eprintln!("Generates an n x n maze (grid side 2n+1) and prints it with # boundary, █ wall, * light, S spawn");
    process::exit(1);
}

fn parse_arg<T: std::str::FromStr>(program: &str, name: &str, value: &str) -> T {
    match value.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Invalid {}: {}", name, value);
            usage(program)
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        usage(&args[0]);
    }

    let n: usize = parse_arg(&args[0], "n", &args[1]);
    if n < 1 {
        eprintln!("n must be at least 1");
        usage(&args[0]);
    }
    let seed: u64 = match args.get(2) {
        Some(value) => parse_arg(&args[0], "seed", value),
        None => rand::random(),
    };
    let lights: usize = match args.get(3) {
        Some(value) => parse_arg(&args[0], "lights", value),
        None => 0,
    };

    let grid = Grid::new(n, lights, seed, &WallCatalog::default());
    print!("{}", grid.to_ascii());

    let mut walls = 0;
    let mut boundary = 0;
    let mut free = 0;
    for cell in grid.cells() {
        match cell.state {
            WallState::Default => walls += 1,
            WallState::End => boundary += 1,
            WallState::Empty => free += 1,
            WallState::Light(_) => {}
        }
    }

    println!("\n=== Summary ===");
    println!("Seed: {}", grid.seed());
    println!("Grid: {}x{}", grid.dimension(), grid.dimension());
    println!("Free cells: {}, walls: {}, boundary: {}", free, walls, boundary);
    println!("Lights: {} of {} requested", grid.lights().len(), lights);
    let (sx, sy) = grid.spawn_point();
    println!("Spawn: ({:.1}, {:.1})", sx, sy);
}
