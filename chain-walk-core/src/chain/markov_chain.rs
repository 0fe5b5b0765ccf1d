use std::cmp::Ordering;

use super::node::{ChainNode, NodeId};
use super::state::ChainState;

/// A Markov chain: a deduplicating state registry plus per-state
/// weighted transition tables.
///
/// The chain is built incrementally by the caller: feed raw state values
/// through [`get_or_insert`](Self::get_or_insert), then record observed
/// transitions with [`link`](Self::link). Once populated, walks are
/// generated over it by [`Walker`](super::walker::Walker).
///
/// ## Responsibilities
/// - Deduplicate states under the type's `compare` behavior
/// - Own every state copy and every transition table
/// - Record transition occurrences between registered nodes
///
/// ## Invariants
/// - No two registered nodes compare equal
/// - Insertion order is preserved; it carries no semantics beyond uniform
///   random start selection
/// - `NodeId`s issued by a chain stay valid for its whole lifetime
///
/// Teardown is `Drop`: the registry owns all nodes by value, so dropping
/// the chain releases every owned state copy and table exactly once.
/// Dropping a freshly constructed, never-populated chain is a no-op.
#[derive(Clone, Debug, Default)]
pub struct MarkovChain<T: ChainState> {
	nodes: Vec<ChainNode<T>>,
}

impl<T: ChainState> MarkovChain<T> {
	/// Creates an empty chain.
	pub fn new() -> Self {
		Self { nodes: Vec::new() }
	}

	/// Looks `state` up in the registry; `None` if it was never inserted.
	///
	/// Pure lookup, no mutation. A miss is not an error.
	pub fn find(&self, state: &T) -> Option<NodeId> {
		self.nodes
			.iter()
			.position(|node| node.value().compare(state) == Ordering::Equal)
			.map(NodeId)
	}

	/// Returns the node registered for `state`, inserting it first if needed.
	///
	/// On insertion the chain takes an owned clone of `state`, wraps it in a
	/// node with an empty transition table and appends it to the registry.
	///
	/// Idempotent: repeated calls with values that compare equal return the
	/// same handle and never grow the registry.
	pub fn get_or_insert(&mut self, state: &T) -> NodeId {
		if let Some(id) = self.find(state) {
			return id;
		}

		self.nodes.push(ChainNode::new(state.clone()));
		NodeId(self.nodes.len() - 1)
	}

	/// Records one observed transition from `from` to `to`.
	///
	/// Creates the table entry with count 1 on first observation, increments
	/// it afterwards. Linking the same pair n times yields a single entry
	/// with count n.
	pub fn link(&mut self, from: NodeId, to: NodeId) {
		self.nodes[from.0].transitions_mut().record(to);
	}

	/// Returns the node behind a handle.
	///
	/// # Panics
	/// Panics if `id` was issued by a different chain and is out of range.
	pub fn node(&self, id: NodeId) -> &ChainNode<T> {
		&self.nodes[id.0]
	}

	/// Number of registered states.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Returns `true` if no state was registered yet.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Iterates over nodes in insertion order.
	pub fn nodes(&self) -> impl Iterator<Item = &ChainNode<T>> {
		self.nodes.iter()
	}
}
