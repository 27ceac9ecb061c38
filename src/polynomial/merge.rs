// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Merging per-configuration weights into a partition function.

use crate::polynomial::WeightVector;
use std::fmt;

/// Combine entries with the same monomial by summing their coefficients.
///
/// The result keeps the first-occurrence order of each distinct monomial.
/// Quadratic in the number of entries.
pub fn merge(weights: Vec<WeightVector>) -> Vec<WeightVector> {
    let mut merged: Vec<WeightVector> = Vec::with_capacity(weights.len());
    let mut absorbed = vec![false; weights.len()];
    for i in 0..weights.len() {
        if absorbed[i] {
            continue;
        }
        let mut term = weights[i].clone();
        for j in i + 1..weights.len() {
            if !absorbed[j] && weights[j].same_monomial(&term) {
                term.set_coefficient(term.coefficient() + weights[j].coefficient());
                absorbed[j] = true;
            }
        }
        merged.push(term);
    }
    merged
}

/// A merged sum of monomials.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PartitionFunction {
    terms: Vec<WeightVector>,
}

impl PartitionFunction {
    /// Merge `weights` into a partition function.
    pub fn from_weights(weights: Vec<WeightVector>) -> Self {
        Self {
            terms: merge(weights),
        }
    }

    pub fn terms(&self) -> &[WeightVector] {
        &self.terms
    }

    pub fn into_terms(self) -> Vec<WeightVector> {
        self.terms
    }

    /// No admissible configuration was found.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of configurations, assuming each contributed coefficient 1.
    pub fn configuration_count(&self) -> i64 {
        self.terms.iter().map(WeightVector::coefficient).sum()
    }
}

impl fmt::Display for PartitionFunction {
    /// Terms joined by `" + "`; an empty function prints nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}
