//! Generic weighted-random-walk library over a dynamically built Markov chain.
//!
//! This crate provides a reusable chain engine including:
//! - A deduplicating, insertion-ordered state registry
//! - Per-state transition tables with occurrence counts
//! - Weighted random walk generation with reproducible seeding
//! - A small trait surface for plugging in domain state types
//!
//! Only the high-level API is exposed publicly. Internal representations
//! (node storage, table layout) are kept private to preserve the
//! append-order invariants the walk selection relies on.

/// Core chain engine and walk generation logic.
///
/// This module exposes the chain, the walker and the state trait while
/// keeping internal node storage private.
pub mod chain;
