//! Cut a random square cake and show the result.
//! Usage:
//!
//! ```bash
//! cargo run --release --example taster 20
//! cargo run --release --example taster 20 50
//! ```
//!
//! The first argument is the side length of the cake, the optional second
//! one the number of flowers, defaulting to a quarter of the cells.

use cake_cutting::{Cake, Coordinate, Cutter};
use rand::Rng;
use std::{collections::BTreeSet, time::Instant};

fn random_flowers(count: usize, width: usize, height: usize) -> BTreeSet<Coordinate> {
    let mut rng = rand::rng();
    let mut flowers = BTreeSet::new();

    while flowers.len() < count {
        flowers.insert(Coordinate::new(
            rng.random_range(1..=width),
            rng.random_range(1..=height),
        ));
    }

    flowers
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("side length needed");
        std::process::exit(1);
    }

    let side: usize = match args[1].parse() {
        Ok(side) if side > 0 => side,
        _ => {
            eprintln!("invalid side length [{}]", args[1]);
            std::process::exit(1);
        }
    };
    let count = args
        .get(2)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(side * side / 4)
        .clamp(1, side * side);

    let mut cake = match Cake::new(side, side, random_flowers(count, side, side)) {
        Ok(cake) => cake,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    println!("start\n\n{cake}");

    let start = Instant::now();
    let stats = Cutter::new().cut(&mut cake);
    let run_time = start.elapsed();

    match stats {
        Ok(stats) => {
            println!("end\n\n{cake}");
            print!("{}", cake.report());
            println!("took {run_time:?}");
            println!("dimensions: {}, {}", cake.width(), cake.height());
            println!("flowers: {}", cake.flowers().len());
            println!("{stats:?}");
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
