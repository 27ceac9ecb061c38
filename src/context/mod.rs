// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context for one enumeration.
//!
//! The SearchContext is the core data structure passed to every predicate. It
//! combines:
//! - the fixed problem: boundary and search options
//! - the mutable search state: the lattice being filled and the weights of
//!   the lattices accepted so far
//! - the statistics counters
//!
//! The lattice is owned exclusively by the context. Each cell is written by
//! exactly one search level and simply overwritten by the next candidate, so
//! backtracking needs no undo log.

use crate::config::SearchConfig;
use crate::geometry::{Boundary, Lattice};
use crate::polynomial::WeightVector;
use crate::state::Statistics;

/// Mutable search state.
#[derive(Debug, Default)]
pub struct DynamicState {
    /// The lattice being filled, row-major.
    pub lattice: Lattice,

    /// Weight of every accepted lattice, in discovery order.
    pub weights: Vec<WeightVector>,
}

/// Search context combining the problem and the search state.
///
/// # Example
///
/// ```
/// use ice_lattice::context::SearchContext;
/// use ice_lattice::geometry::{Boundary, Lattice};
///
/// let ctx = SearchContext::new(Lattice::new(2, 2), Boundary::closed(2, 2));
/// assert_eq!(ctx.rows(), 2);
/// assert!(ctx.state.weights.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct SearchContext {
    /// Terminal declarations the lattice must satisfy.
    pub boundary: Boundary,
    /// Search options.
    pub config: SearchConfig,
    /// Mutable search state.
    pub state: DynamicState,
    /// Counters updated by predicates.
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a context searching over `lattice` with default options.
    pub fn new(lattice: Lattice, boundary: Boundary) -> Self {
        Self::with_config(lattice, boundary, SearchConfig::default())
    }

    /// Create a context with explicit search options.
    pub fn with_config(lattice: Lattice, boundary: Boundary, config: SearchConfig) -> Self {
        Self {
            boundary,
            config,
            state: DynamicState {
                lattice,
                weights: Vec::new(),
            },
            statistics: Statistics::new(),
        }
    }

    pub fn lattice(&self) -> &Lattice {
        &self.state.lattice
    }

    pub fn rows(&self) -> usize {
        self.state.lattice.rows()
    }

    pub fn columns(&self) -> usize {
        self.state.lattice.columns()
    }

    /// Number of cells in the lattice.
    pub fn cell_count(&self) -> usize {
        self.state.lattice.len()
    }

    /// Weight of the most recently accepted lattice.
    pub fn last_weight(&self) -> Option<&WeightVector> {
        self.state.weights.last()
    }
}
