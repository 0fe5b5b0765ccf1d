use std::cmp::Ordering;

/// Contract every state type stored in a chain must fulfil.
///
/// The chain never inspects a state's structure directly; everything it
/// needs goes through this trait (plus `Clone` for the owned copy made at
/// insertion time, and `Drop` for release at teardown).
///
/// ## Responsibilities
/// - `compare`: total order used for registry deduplication.
///   `Ordering::Equal` means "same state".
/// - `render`: produce the textual form of the state for walk output,
///   including any per-state separator (a trailing space, an arrow, ...).
///   The trailing end-of-walk separator is the caller's business.
/// - `is_terminal`: whether a walk must stop upon reaching this state.
///
/// ## Invariants
/// - `compare` must be consistent: equal states stay equal over their
///   lifetime, and cloning preserves equality.
/// - `is_terminal` must be stable for a given state value.
pub trait ChainState: Clone {
	/// Compares two states. `Ordering::Equal` identifies the same state.
	fn compare(&self, other: &Self) -> Ordering;

	/// Renders the state for walk output, separator included.
	fn render(&self) -> String;

	/// Returns `true` if a walk reaching this state must stop.
	fn is_terminal(&self) -> bool;
}
