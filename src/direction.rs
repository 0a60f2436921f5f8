use enum_iterator::Sequence;

/// One of the eight directions a word can be written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence)]
pub enum Direction {
    UpLeft,
    Up,
    UpRight,
    Left,
    Right,
    DownLeft,
    Down,
    DownRight,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// `(dx, dy)`, with `y` growing downwards.
impl From<Direction> for (isize, isize) {
    fn from(value: Direction) -> Self {
        match value {
            Direction::UpLeft => (-1, -1),
            Direction::Up => (0, -1),
            Direction::UpRight => (1, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::DownLeft => (-1, 1),
            Direction::Down => (0, 1),
            Direction::DownRight => (1, 1),
        }
    }
}

impl Direction {
    pub fn delta(self) -> (isize, isize) {
        self.into()
    }

    /// The cell `n` steps from `(x, y)`, or `None` if either coordinate
    /// would go negative. Upper bounds are the grid's business.
    pub fn step(self, x: usize, y: usize, n: isize) -> Option<(usize, usize)> {
        let (dx, dy) = self.delta();
        Some((
            x.checked_add_signed(dx.checked_mul(n)?)?,
            y.checked_add_signed(dy.checked_mul(n)?)?,
        ))
    }
}
