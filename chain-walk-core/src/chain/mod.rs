//! Top-level module for the Markov chain engine.
//!
//! This crate provides a weighted-random-walk engine over a directed graph
//! built incrementally from observed transitions, including:
//! - The state trait contract (`ChainState`)
//! - The chain itself: registry plus transition tables (`MarkovChain`)
//! - Node and transition storage (`ChainNode`, `TransitionTable`)
//! - Walk generation (`Walker`, `Walk`)
//! - Error types (`ChainError`)

/// Trait contract every domain state type must implement.
///
/// Covers ordering, rendering and walk termination. Copying is covered
/// by the `Clone` bound, release by `Drop`.
pub mod state;

/// Node storage: node handles, transitions and per-node transition tables.
///
/// Table layout is append-only; the walker's selection rule depends on
/// entries never being reordered.
pub mod node;

/// The chain engine: deduplicating state registry and link recording.
pub mod markov_chain;

/// Walk generation over a finished chain.
///
/// Weighted random stepping, start-state selection and walk rendering.
pub mod walker;

/// Error types for chain and walk operations.
pub mod error;

pub use error::ChainError;
pub use markov_chain::MarkovChain;
pub use node::{ChainNode, NodeId, Transition, TransitionTable};
pub use state::ChainState;
pub use walker::{Walk, Walker};
