// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search options.

/// What the validator does with the terminal path walk.
///
/// The walk from each input row follows North then West exits and must end
/// at the paired output column. Historically its outcome was computed and
/// then discarded, so every lattice passing the local checks was accepted.
/// `Ignore` keeps that behavior; `Enforce` rejects lattices whose walk fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathCheck {
    /// Walk the paths and log the outcome, without affecting validity.
    #[default]
    Ignore,
    /// Reject a lattice unless every terminal pair is connected.
    Enforce,
}

/// Options for one enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    pub path_check: PathCheck,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the path policy.
    pub fn with_path_check(mut self, path_check: PathCheck) -> Self {
        self.path_check = path_check;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ignores_paths() {
        assert_eq!(SearchConfig::new().path_check, PathCheck::Ignore);
    }

    #[test]
    fn test_with_path_check() {
        let config = SearchConfig::new().with_path_check(PathCheck::Enforce);
        assert_eq!(config.path_check, PathCheck::Enforce);
    }
}
