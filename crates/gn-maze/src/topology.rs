//! The topology contract consumed by every search strategy.

use gn_core::Cell;

/// Answers "where can I go from here?" for a grid maze.
///
/// # Contract
///
/// - Returns the orthogonally adjacent cells of `cell` that can be entered.
/// - Never returns out-of-bounds cells or `cell` itself.
/// - Is a pure function of the maze layout: consumed pellets or moving
///   actors never change the answer.
///
/// Order of the returned cells does not matter; searches impose their own
/// up, right, down, left order.  A neighbour that is not one orthogonal step
/// away is treated as a topology fault by the searches.
pub trait Topology {
    fn valid_moves(&self, cell: Cell) -> Vec<Cell>;

    /// `true` if `cell` has at least one traversable neighbour.
    fn has_moves(&self, cell: Cell) -> bool {
        !self.valid_moves(cell).is_empty()
    }
}

impl<T: Topology + ?Sized> Topology for &T {
    #[inline]
    fn valid_moves(&self, cell: Cell) -> Vec<Cell> {
        (**self).valid_moves(cell)
    }

    #[inline]
    fn has_moves(&self, cell: Cell) -> bool {
        (**self).has_moves(cell)
    }
}
