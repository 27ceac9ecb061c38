// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of admissible lattices and their partition function.
//!
//! The search is the predicate program
//!
//! ```text
//! Cell* -> Count(Leaves) -> Validate -> Weigh -> [Report] -> Count(ValidLattices) -> Fail
//! ```
//!
//! The terminal Fail forces the engine back into the cell predicate after
//! every accepted lattice, so the engine only returns once every filling has
//! been tried. The weights collected in the context are the result.

use crate::config::SearchConfig;
use crate::context::SearchContext;
use crate::engine::{EngineBuilder, Predicate};
use crate::geometry::{Boundary, Lattice};
use crate::polynomial::{BoltzmannWeight, PartitionFunction, WeightRule, WeightVector};
use crate::predicates::report::LeafObserver;
use crate::predicates::{CellPredicate, FailPredicate, ReportPredicate, ValidatePredicate, WeighPredicate};
use crate::state::{Counters, Statistics};
use tracing::info;

/// Configures and runs one enumeration.
///
/// # Example
///
/// ```
/// use ice_lattice::geometry::Boundary;
/// use ice_lattice::partition::PartitionSearch;
///
/// let boundary = Boundary::new(vec![true, false], vec![false, false, true]);
/// let result = PartitionSearch::new(2, 3, boundary).run();
/// assert_eq!(result.partition_function().to_string(), "x1^2 + x0x1 + x0^2");
/// ```
pub struct PartitionSearch {
    lattice: Lattice,
    start: usize,
    boundary: Boundary,
    rule: Box<dyn WeightRule>,
    config: SearchConfig,
    observer: Option<LeafObserver>,
}

impl PartitionSearch {
    /// Search every filling of an empty `rows` x `columns` lattice.
    pub fn new(rows: usize, columns: usize, boundary: Boundary) -> Self {
        Self::from_partial(Lattice::new(rows, columns), 0, boundary)
    }

    /// Search the fillings of cells `start..` of `lattice`, keeping the
    /// cells before `start` as given.
    pub fn from_partial(lattice: Lattice, start: usize, boundary: Boundary) -> Self {
        Self {
            lattice,
            start,
            boundary,
            rule: Box::new(BoltzmannWeight),
            config: SearchConfig::default(),
            observer: None,
        }
    }

    /// Replace the weight rule (default [`BoltzmannWeight`]).
    pub fn with_rule(mut self, rule: impl WeightRule + 'static) -> Self {
        self.rule = Box::new(rule);
        self
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Call `observer` once per accepted lattice, in discovery order.
    pub fn on_leaf(mut self, observer: impl FnMut(&Lattice, &WeightVector) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Run the search to exhaustion.
    pub fn run(self) -> Enumeration {
        let rows = self.lattice.rows();
        let columns = self.lattice.columns();
        info!(
            rows,
            columns,
            start = self.start,
            path_check = ?self.config.path_check,
            "enumerating lattices"
        );

        let mut ctx = SearchContext::with_config(self.lattice, self.boundary, self.config);
        let engine = EngineBuilder::new()
            .add(Box::new(CellPredicate::new(self.start)))
            .add(Statistics::counting_predicate(Counters::Leaves, None))
            .add(Box::new(ValidatePredicate))
            .add(Box::new(WeighPredicate::new(self.rule)))
            .add_optional(
                self.observer
                    .map(|observer| Box::new(ReportPredicate::new(observer)) as Box<dyn Predicate>),
            )
            .add(Statistics::counting_predicate(Counters::ValidLattices, None))
            .terminal(Box::new(FailPredicate))
            .build();

        // The program ends in Fail, so it never suspends.
        let _exhausted = engine.search(&mut ctx);

        let statistics = ctx.statistics;
        info!(
            leaves = statistics.get(Counters::Leaves),
            accepted = statistics.get(Counters::ValidLattices),
            dead_branches = statistics.get(Counters::DeadBranches),
            rejected = statistics.total_failures(),
            "enumeration complete"
        );
        Enumeration {
            weights: ctx.state.weights,
            statistics,
        }
    }
}

/// The outcome of one enumeration.
#[derive(Debug, Clone)]
pub struct Enumeration {
    /// One weight per accepted lattice, in discovery order.
    pub weights: Vec<WeightVector>,
    pub statistics: Statistics,
}

impl Enumeration {
    /// Number of accepted lattices.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Merge the weights into a partition function.
    pub fn partition_function(&self) -> PartitionFunction {
        PartitionFunction::from_weights(self.weights.clone())
    }
}

/// Raw weights of every admissible filling of cells `start..` of `lattice`.
pub fn enumerate(lattice: Lattice, start: usize, boundary: &Boundary) -> Vec<WeightVector> {
    PartitionSearch::from_partial(lattice, start, boundary.clone())
        .run()
        .weights
}

/// Merged partition function of a `rows` x `columns` lattice.
///
/// Malformed or impossible boundaries give an empty result.
///
/// # Example
///
/// ```
/// use ice_lattice::find_partition_function;
///
/// let terms = find_partition_function(3, 3, &[false, false, true], &[false, false, true]);
/// assert_eq!(terms.len(), 1);
/// assert_eq!(terms[0].to_string(), "x2^2");
/// ```
pub fn find_partition_function(
    rows: usize,
    columns: usize,
    inputs: &[bool],
    outputs: &[bool],
) -> Vec<WeightVector> {
    let boundary = Boundary::new(inputs.to_vec(), outputs.to_vec());
    PartitionSearch::new(rows, columns, boundary)
        .run()
        .partition_function()
        .into_terms()
}
