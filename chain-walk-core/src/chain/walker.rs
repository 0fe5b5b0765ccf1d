use rand::Rng;

use super::error::ChainError;
use super::markov_chain::MarkovChain;
use super::node::NodeId;
use super::state::ChainState;

/// One generated sequence of states, in emission order.
///
/// A walk always contains at least its start state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walk {
	steps: Vec<NodeId>,
}

impl Walk {
	/// Number of emitted states.
	pub fn len(&self) -> usize {
		self.steps.len()
	}

	/// A walk is never empty, but the inspection API stays conventional.
	pub fn is_empty(&self) -> bool {
		self.steps.is_empty()
	}

	/// The emitted node handles, in order.
	pub fn steps(&self) -> &[NodeId] {
		&self.steps
	}

	/// Renders the walk by concatenating each state's own rendering.
	///
	/// Per-state separators belong to the state's `render`; the trailing
	/// end-of-walk separator (a newline, usually) belongs to the caller.
	pub fn render<T: ChainState>(&self, chain: &MarkovChain<T>) -> String {
		self.steps.iter().map(|id| chain.node(*id).value().render()).collect()
	}
}

/// Weighted-random walk generator over a populated chain.
///
/// The walker only reads the chain; independent walks over the same chain
/// are free to run in parallel as long as each one gets its own random
/// source. All draws go through the explicit `Rng` argument so a seeded
/// generator reproduces the same walks draw for draw.
///
/// # Example
/// ```
/// use std::cmp::Ordering;
///
/// use chain_walk_core::chain::{ChainState, MarkovChain, Walker};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// #[derive(Clone)]
/// struct Word(&'static str);
///
/// impl ChainState for Word {
/// 	fn compare(&self, other: &Self) -> Ordering {
/// 		self.0.cmp(other.0)
/// 	}
/// 	fn render(&self) -> String {
/// 		format!("{} ", self.0)
/// 	}
/// 	fn is_terminal(&self) -> bool {
/// 		self.0.ends_with('.')
/// 	}
/// }
///
/// let mut chain = MarkovChain::new();
/// let first = chain.get_or_insert(&Word("hello"));
/// let last = chain.get_or_insert(&Word("world."));
/// chain.link(first, last);
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let walk = Walker::new(&chain).generate(&mut rng, Some(first), 10).unwrap();
/// assert_eq!(walk.steps(), &[first, last]);
/// ```
#[derive(Debug)]
pub struct Walker<'a, T: ChainState> {
	chain: &'a MarkovChain<T>,
}

impl<'a, T: ChainState> Walker<'a, T> {
	/// Creates a walker over `chain`.
	pub fn new(chain: &'a MarkovChain<T>) -> Self {
		Self { chain }
	}

	/// Draws a uniformly random non-terminal start node.
	///
	/// Re-draws until a non-terminal node comes up, so the registry must
	/// hold at least one; that precondition is checked up front instead of
	/// looping forever.
	///
	/// # Errors
	/// - [`ChainError::EmptyRegistry`] if no state was registered.
	/// - [`ChainError::NoStartCandidate`] if every registered state is
	///   terminal.
	pub fn first_random_node<R: Rng>(&self, rng: &mut R) -> Result<NodeId, ChainError> {
		if self.chain.is_empty() {
			return Err(ChainError::EmptyRegistry);
		}
		if !self.chain.nodes().any(|node| !node.value().is_terminal()) {
			return Err(ChainError::NoStartCandidate);
		}

		loop {
			let id = NodeId(rng.random_range(0..self.chain.len()));
			if !self.chain.node(id).value().is_terminal() {
				return Ok(id);
			}
		}
	}

	/// Picks the next node from `from`'s transition table, weighted by
	/// occurrence counts.
	///
	/// Draws uniformly in `[0, total_weight)` and takes the first entry in
	/// table order whose cumulative range contains the draw.
	///
	/// Returns `None` if `from` has no outgoing transitions.
	pub fn next_random_node<R: Rng>(&self, from: NodeId, rng: &mut R) -> Option<NodeId> {
		let table = self.chain.node(from).transitions();
		if table.is_empty() {
			return None;
		}

		let draw = rng.random_range(0..table.total_weight());
		table.select(draw)
	}

	/// Generates one walk of at most `max_length` states.
	///
	/// # Parameters
	/// - `start`: node to start from. A terminal start, or `None`, falls
	///   back to a random non-terminal node.
	/// - `max_length`: upper bound on emitted states, start included.
	///
	/// # Behavior
	/// - The start state is always emitted, even with `max_length` 0.
	/// - Stepping stops at the length bound, on an empty transition table,
	///   or right after emitting a terminal state.
	///
	/// # Errors
	/// Start selection errors, see [`first_random_node`](Self::first_random_node).
	pub fn generate<R: Rng>(
		&self,
		rng: &mut R,
		start: Option<NodeId>,
		max_length: usize,
	) -> Result<Walk, ChainError> {
		let first = match start {
			Some(id) if !self.chain.node(id).value().is_terminal() => id,
			_ => self.first_random_node(rng)?,
		};

		let mut steps = vec![first];
		let mut current = first;

		while steps.len() < max_length {
			let next = match self.next_random_node(current, rng) {
				Some(next) => next,
				None => break,
			};

			steps.push(next);
			if self.chain.node(next).value().is_terminal() {
				break;
			}
			current = next;
		}

		Ok(Walk { steps })
	}
}
