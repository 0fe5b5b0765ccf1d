//! Property-based tests for the chain engine.
//!
//! These tests use proptest to verify the registry, linking and walk
//! invariants across many randomly generated inputs.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use chain_walk_core::chain::{ChainState, MarkovChain, Walker};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Clone, Debug)]
struct Token(String);

impl ChainState for Token {
	fn compare(&self, other: &Self) -> Ordering {
		self.0.cmp(&other.0)
	}

	fn render(&self) -> String {
		format!("{} ", self.0)
	}

	fn is_terminal(&self) -> bool {
		self.0.ends_with('.')
	}
}

fn token() -> impl Strategy<Value = Token> {
	"[a-d]{1,3}".prop_map(Token)
}

proptest! {
	#[test]
	fn registry_size_equals_distinct_inserts(words in prop::collection::vec(token(), 0..50)) {
		let mut chain = MarkovChain::new();
		for word in &words {
			chain.get_or_insert(word);
		}

		let distinct: BTreeSet<&str> = words.iter().map(|w| w.0.as_str()).collect();
		prop_assert_eq!(chain.len(), distinct.len());
	}

	#[test]
	fn reinsertion_returns_the_same_handle(words in prop::collection::vec(token(), 1..30)) {
		let mut chain = MarkovChain::new();
		let first_pass: Vec<_> = words.iter().map(|w| chain.get_or_insert(w)).collect();
		let size = chain.len();

		for (word, id) in words.iter().zip(&first_pass) {
			prop_assert_eq!(chain.get_or_insert(word), *id);
		}
		prop_assert_eq!(chain.len(), size);
	}

	#[test]
	fn transition_counts_sum_to_link_calls(
		pairs in prop::collection::vec((0..6usize, 0..6usize), 0..80),
	) {
		let mut chain = MarkovChain::new();
		let ids: Vec<_> = (0..6)
			.map(|i| chain.get_or_insert(&Token(format!("s{i}"))))
			.collect();

		for (from, to) in &pairs {
			chain.link(ids[*from], ids[*to]);
		}

		for (i, id) in ids.iter().enumerate() {
			let expected = pairs.iter().filter(|(from, _)| *from == i).count() as u64;
			let table = chain.node(*id).transitions();
			prop_assert_eq!(table.total_weight(), expected);

			// unique by destination, every count >= 1
			let destinations: BTreeSet<usize> =
				table.iter().map(|entry| entry.to().index()).collect();
			prop_assert_eq!(destinations.len(), table.len());
			prop_assert!(table.iter().all(|entry| entry.count() >= 1));
		}
	}

	#[test]
	fn in_range_draws_always_select(
		pairs in prop::collection::vec((0..4usize, 0..4usize), 1..40),
		draw_factor in 0.0f64..1.0,
	) {
		let mut chain = MarkovChain::new();
		let ids: Vec<_> = (0..4)
			.map(|i| chain.get_or_insert(&Token(format!("s{i}"))))
			.collect();
		for (from, to) in &pairs {
			chain.link(ids[*from], ids[*to]);
		}

		for id in &ids {
			let table = chain.node(*id).transitions();
			let total = table.total_weight();
			if total == 0 {
				prop_assert_eq!(table.select(0), None);
				continue;
			}
			let draw = ((total as f64) * draw_factor) as u64;
			prop_assert!(table.select(draw.min(total - 1)).is_some());
			prop_assert_eq!(table.select(total), None);
		}
	}

	#[test]
	fn walks_never_exceed_the_length_bound(
		pairs in prop::collection::vec((0..5usize, 0..5usize), 1..60),
		seed in any::<u64>(),
		max_length in 1..20usize,
	) {
		let mut chain = MarkovChain::new();
		let ids: Vec<_> = (0..5)
			.map(|i| chain.get_or_insert(&Token(format!("s{i}"))))
			.collect();
		for (from, to) in &pairs {
			chain.link(ids[*from], ids[*to]);
		}

		let mut rng = StdRng::seed_from_u64(seed);
		let walk = Walker::new(&chain)
			.generate(&mut rng, None, max_length)
			.expect("no state here is terminal");

		prop_assert!(walk.len() <= max_length.max(1));
		prop_assert!(!walk.is_empty());
	}

	#[test]
	fn walks_stop_right_after_a_terminal_state(
		seed in any::<u64>(),
		weight in 1..5u64,
	) {
		let mut chain = MarkovChain::new();
		let start = chain.get_or_insert(&Token("go".to_owned()));
		let end = chain.get_or_insert(&Token("end.".to_owned()));
		for _ in 0..weight {
			chain.link(start, end);
		}
		chain.link(start, start);

		let mut rng = StdRng::seed_from_u64(seed);
		let walk = Walker::new(&chain).generate(&mut rng, Some(start), 50).unwrap();

		// the terminal node may only show up as the very last step
		let terminal_positions: Vec<usize> = walk
			.steps()
			.iter()
			.enumerate()
			.filter(|(_, id)| chain.node(**id).value().is_terminal())
			.map(|(i, _)| i)
			.collect();
		prop_assert!(terminal_positions.is_empty() || terminal_positions == vec![walk.len() - 1]);
	}
}
