//! Static positional weights for every square of a board.
//!
//! Each square falls into exactly one [`Tier`], checked in this order:
//!
//!  - [`Tier::Corner`]: the four corners.
//!  - [`Tier::NearCorner`]: the two edge squares touching each corner. Taking one
//!    of these tends to hand the corner to the opponent.
//!  - [`Tier::SecondRing`]: boards of 6×6 and up only. The ring one step in from the
//!    edge, minus the four squares diagonally inside the corners.
//!  - [`Tier::Edge`]: the rest of the outer ring.
//!  - [`Tier::Interior`]: everything else, including the squares diagonally inside
//!    the corners.
//!
//! Tables are indexed by (row, column) throughout.

use derive_more::{Display, Error};
use sable_othello::{Square, MAX_EDGE_LENGTH, MIN_EDGE_LENGTH};

/// The strategic class of a square.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Tier {
    Corner,
    NearCorner,
    SecondRing,
    Edge,
    Interior,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::Corner,
        Tier::NearCorner,
        Tier::SecondRing,
        Tier::Edge,
        Tier::Interior,
    ];

    /// The tuned weight of a square in this tier.
    #[inline]
    pub const fn weight(self) -> i32 {
        match self {
            Tier::Corner => 10,
            Tier::NearCorner => -5,
            Tier::SecondRing => -3,
            Tier::Edge => 5,
            Tier::Interior => 1,
        }
    }

    /// Classify `(row, col)` on an `n`×`n` board.
    fn classify(row: usize, col: usize, n: usize) -> Self {
        let last = n - 1;
        let is_corner = (row == 0 || row == last) && (col == 0 || col == last);
        let is_near_corner = ((row == 0 || row == last) && (col == 1 || col == last - 1))
            || ((col == 0 || col == last) && (row == 1 || row == last - 1));
        let on_second_ring = row == 1 || col == 1 || row == last - 1 || col == last - 1;
        let inside_corner = (row == 1 || row == last - 1) && (col == 1 || col == last - 1);
        let on_edge = row == 0 || col == 0 || row == last || col == last;

        if is_corner {
            Tier::Corner
        } else if is_near_corner {
            Tier::NearCorner
        } else if n >= 6 && on_second_ring && !inside_corner {
            Tier::SecondRing
        } else if on_edge {
            Tier::Edge
        } else {
            Tier::Interior
        }
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq)]
pub enum TableError {
    #[display(
        fmt = "no positional table for edge length {}: must be between {} and {}",
        edge_length,
        MIN_EDGE_LENGTH,
        MAX_EDGE_LENGTH
    )]
    InvalidEdgeLength { edge_length: usize },
}

/// Positional weight of every square on an `n`×`n` board, stored row-major.
/// Immutable once built, so one table can be shared by concurrent searches.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionalTable {
    edge_length: usize,
    tiers: Vec<Tier>,
}

impl PositionalTable {
    /// Build the table for an `edge_length`×`edge_length` board.
    /// Below 4×4 the corner, near-corner and edge tiers overlap, so those sizes are rejected.
    pub fn build(edge_length: usize) -> Result<Self, TableError> {
        if !(MIN_EDGE_LENGTH..=MAX_EDGE_LENGTH).contains(&edge_length) {
            return Err(TableError::InvalidEdgeLength { edge_length });
        }

        let tiers = (0..edge_length * edge_length)
            .map(|index| {
                let (row, col) = Square::from_index(index, edge_length).to_coords();
                Tier::classify(row, col, edge_length)
            })
            .collect();

        Ok(Self { edge_length, tiers })
    }

    #[inline]
    pub fn edge_length(&self) -> usize {
        self.edge_length
    }

    /// Get the tier of `square`, or None if it is off the board.
    #[inline]
    pub fn tier(&self, square: Square) -> Option<Tier> {
        if square.is_within(self.edge_length) {
            Some(self.tiers[square.index(self.edge_length)])
        } else {
            None
        }
    }

    /// Get the weight of `square`, or None if it is off the board.
    #[inline]
    pub fn get(&self, square: Square) -> Option<i32> {
        self.tier(square).map(Tier::weight)
    }

    /// Get the weight of `square`.
    ///
    /// # Panics
    /// If `square` is off the board.
    #[inline]
    pub fn weight(&self, square: Square) -> i32 {
        assert!(
            square.is_within(self.edge_length),
            "square {:?} is off a {}x{} board",
            square,
            self.edge_length,
            self.edge_length
        );
        self.tiers[square.index(self.edge_length)].weight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(table: &PositionalTable) -> Vec<Vec<i32>> {
        let n = table.edge_length();
        (0..n)
            .map(|row| (0..n).map(|col| table.weight(Square::new(row, col))).collect())
            .collect()
    }

    #[test]
    fn rejects_tiny_boards() {
        assert_eq!(
            PositionalTable::build(3),
            Err(TableError::InvalidEdgeLength { edge_length: 3 })
        );
        assert!(PositionalTable::build(0).is_err());
        assert!(PositionalTable::build(17).is_err());
        assert!(PositionalTable::build(4).is_ok());
    }

    #[test]
    fn standard_board_weights() {
        let table = PositionalTable::build(8).unwrap();
        assert_eq!(
            weights(&table),
            vec![
                vec![10, -5, 5, 5, 5, 5, -5, 10],
                vec![-5, 1, -3, -3, -3, -3, 1, -5],
                vec![5, -3, 1, 1, 1, 1, -3, 5],
                vec![5, -3, 1, 1, 1, 1, -3, 5],
                vec![5, -3, 1, 1, 1, 1, -3, 5],
                vec![5, -3, 1, 1, 1, 1, -3, 5],
                vec![-5, 1, -3, -3, -3, -3, 1, -5],
                vec![10, -5, 5, 5, 5, 5, -5, 10],
            ]
        );
    }

    #[test]
    fn small_board_has_no_second_ring() {
        let table = PositionalTable::build(4).unwrap();
        assert_eq!(
            weights(&table),
            vec![
                vec![10, -5, -5, 10],
                vec![-5, 1, 1, -5],
                vec![-5, 1, 1, -5],
                vec![10, -5, -5, 10],
            ]
        );
    }

    #[test]
    fn six_board_weights() {
        let table = PositionalTable::build(6).unwrap();
        assert_eq!(
            weights(&table),
            vec![
                vec![10, -5, 5, 5, -5, 10],
                vec![-5, 1, -3, -3, 1, -5],
                vec![5, -3, 1, 1, -3, 5],
                vec![5, -3, 1, 1, -3, 5],
                vec![-5, 1, -3, -3, 1, -5],
                vec![10, -5, 5, 5, -5, 10],
            ]
        );
    }

    #[test]
    fn tiers_partition_every_board() {
        for n in 6..=MAX_EDGE_LENGTH {
            let table = PositionalTable::build(n).unwrap();
            let count = |tier: Tier| {
                (0..n * n)
                    .filter(|&index| table.tier(Square::from_index(index, n)) == Some(tier))
                    .count()
            };

            let counts: Vec<usize> = Tier::ALL.iter().map(|&tier| count(tier)).collect();
            assert_eq!(counts.iter().sum::<usize>(), n * n);
            assert_eq!(count(Tier::Corner), 4);
            assert_eq!(count(Tier::NearCorner), 8);
            assert_eq!(count(Tier::SecondRing), 4 * (n - 2) - 4 - 4);
            assert_eq!(count(Tier::Edge), 4 * (n - 1) - 4 - 8);
        }
    }

    #[test]
    fn table_is_symmetric() {
        // Weights are invariant under the board's reflections.
        let table = PositionalTable::build(10).unwrap();
        let n = 10;
        for row in 0..n {
            for col in 0..n {
                let w = table.weight(Square::new(row, col));
                assert_eq!(w, table.weight(Square::new(col, row)));
                assert_eq!(w, table.weight(Square::new(n - 1 - row, col)));
                assert_eq!(w, table.weight(Square::new(row, n - 1 - col)));
            }
        }
    }

    #[test]
    fn off_board_lookups() {
        let table = PositionalTable::build(8).unwrap();
        assert_eq!(table.get(Square::new(8, 0)), None);
        assert_eq!(table.tier(Square::new(0, 8)), None);
        assert_eq!(table.get(Square::new(0, 0)), Some(10));
    }

    #[test]
    #[should_panic]
    fn weight_off_board_panics() {
        PositionalTable::build(8).unwrap().weight(Square::new(0, 8));
    }
}
