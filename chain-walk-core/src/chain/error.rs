use thiserror::Error;

/// Errors produced by chain and walk operations.
///
/// Lookup misses are not errors; they are reported as `Option::None` by
/// [`MarkovChain::find`](super::markov_chain::MarkovChain::find).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
	/// A walk was requested on a chain with no registered states.
	#[error("cannot start a walk: the chain has no registered states")]
	EmptyRegistry,

	/// Every registered state is terminal, so no start state can be drawn.
	#[error("cannot start a walk: every registered state is terminal")]
	NoStartCandidate,
}
