//! Snakes-and-ladders random walker.
//!
//! Builds a Markov chain from a fixed 100-cell board (dice moves plus
//! snake/ladder jumps) and prints random walks starting from cell 1.

mod board;

use chain_walk_core::chain::{MarkovChain, Walker};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use board::Cell;

/// A walk stops after this many cells at the latest.
const MAX_GENERATION_LENGTH: usize = 60;

#[derive(Parser)]
#[command(name = "chain-walk-snakes")]
#[command(about = "Random walks over a snakes-and-ladders board", long_about = None)]
struct Cli {
    /// RNG seed, for reproducible output
    seed: u64,

    /// Number of walks to generate
    num_of_walks: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut chain = MarkovChain::new();
    board::fill_chain(&mut chain);
    log::debug!("board registered with {} cells", chain.len());

    let start = chain
        .find(&Cell::plain(1))
        .ok_or("board is missing cell 1")?;

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let walker = Walker::new(&chain);

    for i in 0..cli.num_of_walks {
        let walk = walker.generate(&mut rng, Some(start), MAX_GENERATION_LENGTH)?;
        println!("Random Walk {}: {}", i + 1, walk.render(&chain));
    }

    Ok(())
}
