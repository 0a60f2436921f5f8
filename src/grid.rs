use itertools::{Itertools, Position};

pub const TEXT_INSIDE_SPACING: &str = "   ";

pub const DEFAULT_PLACEHOLDER: char = '.';

/// A fixed-size letter grid. Empty cells hold the placeholder character.
///
/// Cloning gives an independent snapshot, which is what the scheduler keeps
/// on its checkpoint stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
    width: usize,
    placeholder: char,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    cells: Vec<char>,
}

impl Row {
    fn new(width: usize, placeholder: char) -> Self {
        Self {
            cells: vec![placeholder; width],
        }
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (position, c) in self.cells.iter().with_position() {
            match position {
                Position::First | Position::Only => write!(f, "{c}")?,
                Position::Middle | Position::Last => write!(f, "{TEXT_INSIDE_SPACING}{c}")?,
            }
        }
        Ok(())
    }
}

impl Grid {
    pub fn new(width: usize, height: usize, placeholder: char) -> Self {
        Self {
            rows: vec![Row::new(width, placeholder); height],
            width,
            placeholder,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.rows.get(y).and_then(|row| row.cells.get(x).copied())
    }

    pub fn is_placeholder(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == Some(self.placeholder)
    }

    /// Only the placement executor and the filler write cells.
    pub(crate) fn set(&mut self, x: usize, y: usize, c: char) {
        if let Some(cell) = self.rows.get_mut(y).and_then(|row| row.cells.get_mut(x)) {
            *cell = c;
        }
    }

    /// Every cell as `(x, y, c)`, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.cells.iter().enumerate().map(move |(x, c)| (x, y, *c))
        })
    }

    pub fn placeholder_count(&self) -> usize {
        self.cells().filter(|(_, _, c)| *c == self.placeholder).count()
    }

    /// Rows as plain strings without the display spacing.
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.cells.iter().collect())
            .collect()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (position, row) in self.rows.iter().with_position() {
            if matches!(position, Position::Middle | Position::Last) {
                writeln!(f)?;
            }
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
