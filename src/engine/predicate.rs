// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for non-deterministic search.
//!
//! The search engine works by trying predicates in sequence. Each predicate
//! represents a step of the search: a choice point (which cell shape to
//! place), a check (is the completed lattice valid?) or an action (record
//! its weight). Predicates can succeed, fail, or offer choices.
//!
//! # Example
//!
//! ```
//! use ice_lattice::context::SearchContext;
//! use ice_lattice::engine::{Predicate, PredicateResult};
//! use ice_lattice::geometry::SHAPES;
//!
//! /// Place each legal shape in the first cell in turn.
//! #[derive(Debug)]
//! struct FirstCell;
//!
//! impl Predicate for FirstCell {
//!     fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
//!         PredicateResult::Choices(SHAPES.len())
//!     }
//!
//!     fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
//!         ctx.state.lattice.set(0, 0, SHAPES[choice]);
//!         PredicateResult::Success
//!     }
//!
//!     fn name(&self) -> &str {
//!         "FirstCell"
//!     }
//! }
//! ```

use crate::context::SearchContext;
use std::fmt::Debug;

/// Result of attempting a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Predicate succeeded. Move to next predicate in sequence.
    Success,

    /// Predicate succeeded but stay at same predicate with next round.
    /// Lets one predicate run repeatedly, e.g. once per lattice cell.
    SuccessSamePredicate,

    /// Predicate has no (more) valid choices. Backtrack to previous predicate.
    Failure,

    /// Predicate has `n` alternatives.
    /// Engine will call retry_pred(round, choice) for each choice in 0..n.
    Choices(usize),

    /// Suspend execution. Engine returns control with state preserved.
    Suspend,
}

/// A predicate that ends a program: it only ever fails or suspends.
///
/// [`EngineBuilder`](crate::engine::EngineBuilder) only produces an engine once
/// a terminal predicate has been added, so every built program ends properly.
pub trait TerminalPredicate: Predicate {}

/// Trait for search predicates in the non-deterministic engine.
///
/// # Lifecycle
///
/// 1. Engine calls `try_pred` when first reaching the predicate
/// 2. Success: engine advances to the next predicate
/// 3. Choices(n): engine calls `retry_pred` with choice 0, advancing on success;
///    each later backtrack into this predicate tries the next choice
/// 4. Failure, or choices exhausted: engine backtracks to the previous predicate
///
/// # State
///
/// Nothing is rewound on backtrack. A predicate that writes state must
/// overwrite it on every retry (the cell predicate writes its cell for each
/// choice); anything appended to the context, such as accepted weights and
/// statistics, outlives the branch that produced it.
pub trait Predicate: Debug {
    /// Try this predicate for round `round`.
    ///
    /// The round starts at 0 and increments each time the predicate returns
    /// `SuccessSamePredicate`.
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult;

    /// Retry this predicate with a specific choice, after try_pred returned Choices(n).
    ///
    /// May return `Success`, `SuccessSamePredicate` or `Failure` (try the next
    /// choice). Returning Choices or Suspend is a programming error.
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        // Predicates that return Choices must implement this.
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Name for logging. Defaults to the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
