//! Enumerates the legal placements of a word against a partly filled grid.
//!
//! A placement is legal when every cell it covers is inside the grid and
//! holds either the placeholder or the word's own letter at that index. The
//! second case is what lets words cross.

use enum_iterator::all;
use itertools::Itertools;

use crate::{
    direction::Direction,
    error::{Error, Result},
    grid::Grid,
    placement::Placement,
    word::Word,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureError {
    DoesntFit,
    Conflicts,
}

/// Checks a single placement.
pub fn measure(
    word: &Word,
    grid: &Grid,
    start_x: usize,
    start_y: usize,
    dir: Direction,
) -> Result<(), MeasureError> {
    // Work from the end so that we can quickly fail if it doesn't fit
    for (char_no, c) in word.letters().iter().enumerate().rev() {
        let (x, y) = dir
            .step(start_x, start_y, char_no as isize)
            .ok_or(MeasureError::DoesntFit)?;
        match grid.get(x, y) {
            Some(cell) if cell == grid.placeholder() || cell == *c => (),
            Some(_) => return Err(MeasureError::Conflicts),
            None => return Err(MeasureError::DoesntFit),
        }
    }

    Ok(())
}

/// Placements whose first letter sits on `(x, y)`.
pub fn positions_from_empty(word: &Word, grid: &Grid, x: usize, y: usize) -> Vec<Placement> {
    all::<Direction>()
        .filter(|dir| measure(word, grid, x, y, *dir).is_ok())
        .map(|dir| Placement::new(x, y, dir))
        .collect()
}

/// Placements that put `word[index]` on the already filled cell `(x, y)`.
pub fn positions_from_filled(
    word: &Word,
    grid: &Grid,
    x: usize,
    y: usize,
    index: usize,
) -> Result<Vec<Placement>> {
    let Some(&expected) = word.letters().get(index) else {
        return Err(Error::InvalidIndex {
            word: word.to_string(),
            index,
        });
    };
    let found = grid.get(x, y).unwrap_or(grid.placeholder());
    if found != expected {
        return Err(Error::ContractViolation {
            word: word.to_string(),
            index,
            x,
            y,
            expected,
            found,
        });
    }

    Ok(all::<Direction>()
        .filter_map(|dir| {
            let (start_x, start_y) = dir.step(x, y, -(index as isize))?;
            measure(word, grid, start_x, start_y, dir).ok()?;
            Some(Placement::new(start_x, start_y, dir))
        })
        .collect())
}

/// Every legal placement of `word` on `grid`.
///
/// The same placement is reachable from each filled cell it crosses, so the
/// result is deduplicated to keep a random pick uniform over placements.
pub fn find_word_positions(word: &Word, grid: &Grid) -> Result<Vec<Placement>> {
    let mut positions = vec![];
    for (x, y, c) in grid.cells() {
        if c == grid.placeholder() {
            positions.extend(positions_from_empty(word, grid, x, y));
        } else {
            for n in word.indices_of(c) {
                positions.extend(positions_from_filled(word, grid, x, y, n)?);
            }
        }
    }
    Ok(positions.into_iter().unique().collect())
}

/// Finds an existing occurrence of `word` reading in a straight line.
pub fn locate_word(word: &Word, grid: &Grid) -> Option<Placement> {
    grid.cells()
        .filter(|(_, _, c)| Some(c) == word.letters().first())
        .flat_map(|(x, y, _)| all::<Direction>().map(move |dir| Placement::new(x, y, dir)))
        .find(|placement| {
            word.letters().iter().enumerate().all(|(n, c)| {
                placement
                    .direction
                    .step(placement.x, placement.y, n as isize)
                    .and_then(|(x, y)| grid.get(x, y))
                    == Some(*c)
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::place_word;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn measure_reports_why() {
        let grid = place_word(
            &word("cat"),
            &Placement::new(0, 0, Direction::Right),
            &Grid::new(4, 4, '.'),
        );
        assert_eq!(measure(&word("cow"), &grid, 0, 0, Direction::Down), Ok(()));
        assert_eq!(
            measure(&word("dog"), &grid, 0, 0, Direction::Down),
            Err(MeasureError::Conflicts)
        );
        assert_eq!(
            measure(&word("dog"), &grid, 2, 2, Direction::DownRight),
            Err(MeasureError::DoesntFit)
        );
        assert_eq!(
            measure(&word("dog"), &grid, 1, 1, Direction::UpLeft),
            Err(MeasureError::DoesntFit)
        );
    }

    #[test]
    fn empty_corner_on_blank_grid() {
        let grid = Grid::new(3, 3, '.');
        let mut dirs: Vec<Direction> = positions_from_empty(&word("cat"), &grid, 0, 0)
            .into_iter()
            .map(|p| p.direction)
            .collect();
        dirs.sort();
        assert_eq!(
            dirs,
            vec![Direction::Right, Direction::Down, Direction::DownRight]
        );
    }

    #[test]
    fn filled_cell_threads_the_matching_letter() {
        let grid = place_word(
            &word("cat"),
            &Placement::new(0, 1, Direction::Right),
            &Grid::new(3, 3, '.'),
        );
        // 'A' of CAT sits at (1, 1); put the 'A' of BAT there too.
        let placements = positions_from_filled(&word("bat"), &grid, 1, 1, 1).unwrap();
        assert!(!placements.is_empty());
        for p in &placements {
            assert_eq!(p.direction.step(p.x, p.y, 1), Some((1, 1)));
            assert!(measure(&word("bat"), &grid, p.x, p.y, p.direction).is_ok());
        }
        // Left/Right would overwrite C or T with B.
        assert!(placements.iter().all(|p| !matches!(
            p.direction,
            Direction::Left | Direction::Right
        )));
    }

    #[test]
    fn filled_cell_contract() {
        let grid = place_word(
            &word("cat"),
            &Placement::new(0, 0, Direction::Right),
            &Grid::new(3, 3, '.'),
        );
        assert!(matches!(
            positions_from_filled(&word("bat"), &grid, 1, 0, 3),
            Err(Error::InvalidIndex { index: 3, .. })
        ));
        assert!(matches!(
            positions_from_filled(&word("bat"), &grid, 0, 0, 1),
            Err(Error::ContractViolation {
                expected: 'A',
                found: 'C',
                ..
            })
        ));
    }

    #[test]
    fn whole_grid_is_stable_and_distinct() {
        let grid = place_word(
            &word("tree"),
            &Placement::new(0, 0, Direction::DownRight),
            &Grid::new(5, 5, '.'),
        );
        let first = find_word_positions(&word("tee"), &grid).unwrap();
        let second = find_word_positions(&word("tee"), &grid).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.iter().unique().count(), first.len());
        for p in &first {
            assert!(measure(&word("tee"), &grid, p.x, p.y, p.direction).is_ok());
        }
    }

    #[test]
    fn single_cell_grid() {
        let grid = Grid::new(1, 1, '.');
        assert_eq!(find_word_positions(&word("a"), &grid).unwrap().len(), 8);
        assert!(find_word_positions(&word("ab"), &grid).unwrap().is_empty());
    }

    #[test]
    fn locates_placed_words() {
        let placement = Placement::new(3, 3, Direction::UpLeft);
        let grid = place_word(&word("wolf"), &placement, &Grid::new(4, 4, '.'));
        assert_eq!(locate_word(&word("wolf"), &grid), Some(placement));
        assert_eq!(locate_word(&word("flow"), &grid).map(|p| (p.x, p.y)), Some((0, 0)));
        assert_eq!(locate_word(&word("owl"), &grid), None);
    }
}
