// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The weight vector: one monomial in x0..x{rows-1}.
//!
//! Slot 0 holds the coefficient. While a lattice is weighed it is only ever
//! 0 or 1 (a flag recording that some cell contributed a constant term);
//! after merging it counts the configurations sharing the monomial. Slots
//! `1..=rows` hold the exponent of `x{slot-1}`.
//!
//! This is a narrow encoding of a single monomial with one variable per row,
//! which is all the lattice weight rules produce. It is not a general
//! polynomial type.
//!
//! # Examples
//!
//! ```
//! use ice_lattice::polynomial::WeightVector;
//!
//! let w = WeightVector::from(vec![2, 1, 0, 3]);
//! assert_eq!(w.variables(), 3);
//! assert_eq!(w.exponent(2), 3);
//! assert_eq!(format!("{}", w), "2x0x2^3");
//! ```

use std::fmt;

/// Coefficient followed by one exponent per row variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeightVector(Vec<i64>);

impl WeightVector {
    /// The zero vector for a lattice with `rows` rows (length `rows + 1`).
    pub fn zero(rows: usize) -> Self {
        Self(vec![0; rows + 1])
    }

    /// Number of row variables (length minus the coefficient slot).
    pub fn variables(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn coefficient(&self) -> i64 {
        self.0.first().copied().unwrap_or(0)
    }

    pub fn set_coefficient(&mut self, coefficient: i64) {
        self.0[0] = coefficient;
    }

    /// Exponent of `x{variable}`.
    ///
    /// # Panics
    ///
    /// Panics if `variable >= self.variables()`.
    pub fn exponent(&self, variable: usize) -> i64 {
        self.0[variable + 1]
    }

    /// Raise the exponent of `x{variable}` by `by`.
    pub fn add_exponent(&mut self, variable: usize, by: i64) {
        self.0[variable + 1] += by;
    }

    /// The exponent slots, `x0` first.
    pub fn exponents(&self) -> &[i64] {
        self.0.get(1..).unwrap_or(&[])
    }

    /// Do both vectors describe the same monomial, whatever their coefficients?
    pub fn same_monomial(&self, other: &WeightVector) -> bool {
        self.0.len() == other.0.len() && self.exponents() == other.exponents()
    }

    /// Merge one cell's local weight into this accumulator.
    ///
    /// A positive local coefficient sets the coefficient to exactly 1 (it is
    /// a flag, not a sum); any other local coefficient is added. Exponents are
    /// added slot by slot.
    pub fn accumulate(&mut self, local: &WeightVector) {
        debug_assert_eq!(
            self.0.len(),
            local.0.len(),
            "local weight has the wrong number of slots"
        );
        if local.coefficient() > 0 {
            self.0[0] = 1;
        } else {
            self.0[0] += local.coefficient();
        }
        for (slot, &value) in self.0.iter_mut().zip(&local.0).skip(1) {
            *slot += value;
        }
    }

    /// The raw slots, coefficient first.
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }
}

impl From<Vec<i64>> for WeightVector {
    fn from(slots: Vec<i64>) -> Self {
        Self(slots)
    }
}

impl From<WeightVector> for Vec<i64> {
    fn from(weight: WeightVector) -> Self {
        weight.0
    }
}

impl fmt::Display for WeightVector {
    /// Format as `"0"`, `"1"`, `"x0x2^3"` or `"2x0x2^3"`.
    ///
    /// A zero coefficient prints `"0"` whatever the exponents. A coefficient
    /// of exactly 1 is dropped when a variable follows.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coefficient = self.coefficient();
        if coefficient == 0 {
            return write!(f, "0");
        }
        let has_variables = self.exponents().iter().any(|&e| e != 0);
        if coefficient != 1 || !has_variables {
            write!(f, "{}", coefficient)?;
        }
        for (variable, &exponent) in self.exponents().iter().enumerate() {
            match exponent {
                0 => {}
                1 => write!(f, "x{}", variable)?,
                _ => write!(f, "x{}^{}", variable, exponent)?,
            }
        }
        Ok(())
    }
}
