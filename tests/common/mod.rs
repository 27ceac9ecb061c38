// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use ice_lattice::context::SearchContext;
use ice_lattice::geometry::boundary::parse_flags;
use ice_lattice::geometry::{Boundary, Lattice};
use ice_lattice::{PartitionSearch, PathCheck, Predicate, PredicateResult, SearchConfig};
use std::cell::RefCell;
use std::rc::Rc;

/// Boundary from flag strings such as `"tf"` and `"001"`.
pub fn boundary(inputs: &str, outputs: &str) -> Boundary {
    Boundary::new(flags(inputs), flags(outputs))
}

pub fn flags(text: &str) -> Vec<bool> {
    parse_flags(text).expect("test flags are well formed")
}

/// Formatted partition function under the given path policy.
pub fn partition_function(
    rows: usize,
    columns: usize,
    inputs: &str,
    outputs: &str,
    path_check: PathCheck,
) -> String {
    PartitionSearch::new(rows, columns, boundary(inputs, outputs))
        .with_config(SearchConfig::new().with_path_check(path_check))
        .run()
        .partition_function()
        .to_string()
}

/// A predicate that records a copy of the lattice each time it is reached.
///
/// Used to observe the cell predicate's fillings without the validator.
#[derive(Debug, Clone, Default)]
pub struct SnapshotPredicate(pub Rc<RefCell<Vec<Lattice>>>);

impl Predicate for SnapshotPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        self.0.borrow_mut().push(ctx.lattice().clone());
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Snapshot"
    }
}
