use super::state::ChainState;

/// Handle to a node inside a [`MarkovChain`](super::markov_chain::MarkovChain).
///
/// A `NodeId` is a cheap, copyable index into the chain's registry. It is
/// only meaningful for the chain that issued it, and stays valid for that
/// chain's whole lifetime (states are never removed).
///
/// Identity comparison of two handles (`==`) is the identity comparison of
/// the nodes themselves: transition destinations are matched this way, not
/// by state value equality.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
	/// Returns the position of the node in registry insertion order.
	pub fn index(&self) -> usize {
		self.0
	}
}

/// One weighted outgoing edge of a node.
///
/// `count` is the number of times this transition was observed. It starts
/// at 1 and is only ever incremented.
#[derive(Clone, Copy, Debug)]
pub struct Transition {
	to: NodeId,
	count: u64,
}

impl Transition {
	/// The destination node (non-owning back-reference into the registry).
	pub fn to(&self) -> NodeId {
		self.to
	}

	/// How many times this transition was observed.
	pub fn count(&self) -> u64 {
		self.count
	}
}

/// Append-only table of a node's outgoing transitions.
///
/// ## Invariants
/// - Each destination appears at most once.
/// - Entries keep their insertion order forever; recording an existing
///   destination increments in place, recording a new one appends.
///   The walker's tie-break rule (first entry whose cumulative range
///   contains the draw) depends on this.
/// - All counts are >= 1.
#[derive(Clone, Debug, Default)]
pub struct TransitionTable {
	entries: Vec<Transition>,
}

impl TransitionTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self { entries: Vec::new() }
	}

	/// Returns the position of `to` in the table, `None` if absent.
	///
	/// Destinations are compared by node identity, not by state value.
	pub fn position_of(&self, to: NodeId) -> Option<usize> {
		self.entries.iter().position(|entry| entry.to == to)
	}

	/// Records one observation of a transition toward `to`.
	///
	/// - If the destination already has an entry, its count is increased.
	/// - Otherwise a new entry is appended with an initial count of 1.
	pub fn record(&mut self, to: NodeId) {
		match self.position_of(to) {
			Some(index) => self.entries[index].count += 1,
			None => self.entries.push(Transition { to, count: 1 }),
		}
	}

	/// Sum of all entry counts.
	pub fn total_weight(&self) -> u64 {
		self.entries.iter().map(|entry| entry.count).sum()
	}

	/// Resolves a draw in `[0, total_weight)` to a destination.
	///
	/// Scans entries in table order, accumulating counts, and returns the
	/// first entry whose cumulative range contains `draw`. A draw of 0
	/// always selects the first entry.
	///
	/// Returns `None` if the table is empty or `draw` is out of range.
	pub fn select(&self, mut draw: u64) -> Option<NodeId> {
		for entry in &self.entries {
			if draw < entry.count {
				return Some(entry.to);
			}
			draw -= entry.count;
		}
		None
	}

	/// Number of distinct destinations.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if the node has no outgoing transitions.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &Transition> {
		self.entries.iter()
	}
}

/// One node of the chain: an owned state copy plus its outgoing transitions.
///
/// Nodes are owned by the registry and live exactly as long as the chain;
/// dropping the chain releases every state copy and every table once.
#[derive(Clone, Debug)]
pub struct ChainNode<T: ChainState> {
	value: T,
	transitions: TransitionTable,
}

impl<T: ChainState> ChainNode<T> {
	pub(crate) fn new(value: T) -> Self {
		Self { value, transitions: TransitionTable::new() }
	}

	/// The state value this node wraps.
	pub fn value(&self) -> &T {
		&self.value
	}

	/// The node's outgoing transition table.
	pub fn transitions(&self) -> &TransitionTable {
		&self.transitions
	}

	pub(crate) fn transitions_mut(&mut self) -> &mut TransitionTable {
		&mut self.transitions
	}
}
