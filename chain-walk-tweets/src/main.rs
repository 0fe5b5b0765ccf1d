//! Random tweet generator.
//!
//! Builds a word-level Markov chain from a text corpus (one sentence per
//! line) and prints weighted random walks over it as tweets.

mod corpus;
mod word;

use std::path::PathBuf;

use chain_walk_core::chain::{MarkovChain, Walker};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A tweet stops after this many words at the latest.
const MAX_TWEET_LENGTH: usize = 20;

#[derive(Parser)]
#[command(name = "chain-walk-tweets")]
#[command(about = "Generates random tweets from a text corpus", long_about = None)]
struct Cli {
    /// RNG seed, for reproducible output
    seed: u64,

    /// Number of tweets to generate
    num_of_tweets: u32,

    /// Path to the text corpus, one sentence per line
    text_corpus: PathBuf,

    /// Number of corpus words to read (whole corpus when omitted)
    num_of_words: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let lines = corpus::read_lines(&cli.text_corpus)
        .map_err(|e| format!("failed to open {}: {e}", cli.text_corpus.display()))?;

    let mut chain = MarkovChain::new();
    corpus::fill_chain(&mut chain, &lines, cli.num_of_words);
    log::info!(
        "loaded {} unique words from {}",
        chain.len(),
        cli.text_corpus.display()
    );

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let walker = Walker::new(&chain);

    for i in 0..cli.num_of_tweets {
        let walk = walker.generate(&mut rng, None, MAX_TWEET_LENGTH)?;
        println!("Tweet {}: {}", i + 1, walk.render(&chain));
    }

    Ok(())
}
