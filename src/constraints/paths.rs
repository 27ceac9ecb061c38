// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Terminal connectivity: does each input row reach its paired output column?
//!
//! From cell `(source_row, 0)` the walk repeatedly takes the North exit
//! (row + 1) or, failing that, the West exit (column + 1). It ends once the
//! row index reaches `rows`, i.e. the path has left through the top edge.

use crate::constraints::ValidationFailure;
use crate::geometry::{Boundary, Lattice};

/// Follow the path starting at the column-0 edge of `source_row`.
///
/// Returns the column at which the path leaves through the top edge. A cell
/// with neither exit, or a West exit off the side of the grid, fails closed.
pub fn walk(lattice: &Lattice, source_row: usize) -> Result<usize, ValidationFailure> {
    let stuck = |row, col| ValidationFailure::StuckPath {
        source_row,
        row,
        col,
    };
    let (mut row, mut col) = (source_row, 0);
    while row < lattice.rows() {
        let vertex = lattice.try_get(row, col).ok_or_else(|| stuck(row, col))?;
        if vertex.north() {
            row += 1;
        } else if vertex.west() {
            col += 1;
        } else {
            return Err(stuck(row, col));
        }
    }
    Ok(col)
}

/// Check every terminal pair of `boundary`, stopping at the first failure.
///
/// A boundary with no terminals is trivially connected.
pub fn check_paths(lattice: &Lattice, boundary: &Boundary) -> Result<(), ValidationFailure> {
    for (source_row, target_col) in boundary.terminal_pairs() {
        let reached = walk(lattice, source_row)?;
        if reached != target_col {
            return Err(ValidationFailure::MisroutedPath {
                source_row,
                target_col,
                reached,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::SHAPES;

    fn corner_lattice() -> Lattice {
        let (ns, sw, se) = (SHAPES[0], SHAPES[2], SHAPES[4]);
        Lattice::from_rows(vec![
            vec![se, se, se],
            vec![se, se, se],
            vec![sw, sw, ns],
        ])
        .unwrap()
    }

    #[test]
    fn test_walk_turns_at_corner() {
        assert_eq!(walk(&corner_lattice(), 2), Ok(2));
    }

    #[test]
    fn test_walk_stuck() {
        assert_eq!(
            walk(&corner_lattice(), 0),
            Err(ValidationFailure::StuckPath {
                source_row: 0,
                row: 0,
                col: 0
            })
        );
    }

    #[test]
    fn test_walk_off_the_side_fails_closed() {
        let lattice = Lattice::from_rows(vec![vec![SHAPES[2]]]).unwrap();
        assert_eq!(
            walk(&lattice, 0),
            Err(ValidationFailure::StuckPath {
                source_row: 0,
                row: 0,
                col: 1
            })
        );
    }

    #[test]
    fn test_check_paths() {
        let lattice = corner_lattice();
        let boundary = Boundary::new(vec![false, false, true], vec![false, false, true]);
        assert_eq!(check_paths(&lattice, &boundary), Ok(()));

        assert_eq!(check_paths(&lattice, &Boundary::closed(3, 3)), Ok(()));
    }

    #[test]
    fn test_check_paths_misrouted() {
        // Straight up from row 0 of a one-column lattice lands in column 0.
        let lattice = Lattice::from_rows(vec![vec![SHAPES[0]], vec![SHAPES[0]]]).unwrap();
        let boundary = Boundary::new(vec![true, false], vec![true]);
        assert_eq!(check_paths(&lattice, &boundary), Ok(()));

        let lattice = Lattice::from_rows(vec![vec![SHAPES[0], SHAPES[0]]]).unwrap();
        let boundary = Boundary::new(vec![true], vec![false, true]);
        assert_eq!(
            check_paths(&lattice, &boundary),
            Err(ValidationFailure::MisroutedPath {
                source_row: 0,
                target_col: 1,
                reached: 0
            })
        );
    }
}
