use crate::{direction::Direction, grid::Grid, word::Word};

/// Where a word goes: its first letter at `(x, y)`, the rest following
/// `direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Placement {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
}

impl Placement {
    pub fn new(x: usize, y: usize, direction: Direction) -> Self {
        Self { x, y, direction }
    }

    /// The cells a word of `len` letters covers, first letter first. Cells
    /// that would fall below zero are cut off, so callers must only use this
    /// on placements that are known to fit.
    pub fn cells(&self, len: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..len).map_while(move |n| self.direction.step(self.x, self.y, n as isize))
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}) {}", self.x, self.y, self.direction)
    }
}

/// Writes `word` onto a copy of `grid`. The placement must already have been
/// checked by the finder.
pub fn place_word(word: &Word, placement: &Placement, grid: &Grid) -> Grid {
    let mut placed = grid.clone();
    for ((x, y), c) in placement.cells(word.len()).zip(word.letters()) {
        placed.set(x, y, *c);
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_only_the_footprint() {
        let grid = Grid::new(4, 4, '.');
        let word = Word::new("dog").unwrap();
        let placement = Placement::new(3, 0, Direction::DownLeft);

        let placed = place_word(&word, &placement, &grid);

        assert_eq!(placed.lines(), vec!["...D", "..O.", ".G..", "...."]);
        assert_eq!(grid.placeholder_count(), 16);
    }

    #[test]
    fn cells_follow_direction() {
        let placement = Placement::new(2, 2, Direction::Up);
        assert_eq!(
            placement.cells(3).collect::<Vec<_>>(),
            vec![(2, 2), (2, 1), (2, 0)]
        );
    }
}
