use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use chain_walk_core::chain::{MarkovChain, NodeId};

use crate::word::Word;

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub fn read_lines<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
    let mut contents = String::new();
    File::open(filename)?.read_to_string(&mut contents)?;
    Ok(contents.lines().map(str::to_owned).collect())
}

/// Fills the chain from corpus lines.
///
/// Each line is a sentence: every whitespace-separated word is registered
/// and linked to its successor within the line. Lines do not link across
/// each other.
///
/// # Parameters
/// - `word_limit`: maximum number of words to read over all lines; `None`
///   reads the whole corpus. Reading stops mid-line once the limit is hit.
pub fn fill_chain(chain: &mut MarkovChain<Word>, lines: &[String], word_limit: Option<usize>) {
    let mut remaining = word_limit;

    for line in lines {
        let mut prev: Option<NodeId> = None;

        for token in line.split_whitespace() {
            if remaining == Some(0) {
                return;
            }

            let current = chain.get_or_insert(&Word::new(token));
            if let Some(prev) = prev {
                chain.link(prev, current);
            }

            prev = Some(current);
            if let Some(remaining) = remaining.as_mut() {
                *remaining -= 1;
            }
        }
    }
}
