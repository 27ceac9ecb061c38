// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lattice constraints.
//!
//! # Local constraints (applied while filling)
//!
//! [`candidates`] narrows the five legal shapes for one cell using the
//! already-fixed neighbours and the boundary. Pruning here is what keeps the
//! search far below its 5^(rows*columns) worst case.
//!
//! # Global constraints (applied to a completed lattice)
//!
//! [`validate`] re-checks every structural rule over the whole grid and walks
//! the terminal paths ([`check_paths`]).

pub mod candidates;
pub mod errors;
pub mod paths;
pub mod validation;

pub use candidates::candidates;
pub use errors::{ValidationFailure, ValidationFailureKind};
pub use paths::{check_paths, walk};
pub use validation::{is_valid, validate};
