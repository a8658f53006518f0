//! Miscellaneous project utilities.

use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Column labels, in order.
pub const COLUMN_LABELS: &str = "ABCDEFGHIJKLMNOP";

/// Format `edge_length`² characters into a pretty grid format.
/// `piece_iter` must yield exactly `edge_length`² items.
pub fn format_grid<T: Iterator<Item = char>>(
    mut piece_iter: T,
    edge_length: usize,
    f: &mut Formatter,
) -> fmt::Result {
    write!(f, "   ")?;
    for label in COLUMN_LABELS.chars().take(edge_length) {
        write!(f, " {}", label)?;
    }

    for row in 0..edge_length {
        write!(f, "\n{:>3} ", row + 1)?;
        for _ in 0..edge_length {
            write!(f, "{} ", piece_iter.next().ok_or(fmt::Error)?)?;
        }
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
