use rand::Rng;

use crate::grid::Grid;

pub fn rand_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'A' + rng.gen_range(0..26u8))
}

/// Replaces every placeholder with a random uppercase letter. Placed letters
/// are left alone.
pub fn fill<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let blanks: Vec<(usize, usize)> = grid
        .cells()
        .filter(|(_, _, c)| *c == grid.placeholder())
        .map(|(x, y, _)| (x, y))
        .collect();
    for (x, y) in blanks {
        grid.set(x, y, rand_letter(rng));
    }
}
