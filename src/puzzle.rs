use std::collections::BTreeMap;

use log::info;
use rand::{rngs::StdRng, SeedableRng as _};

use crate::{
    config::{GeneratorConfig, Seed},
    direction::Direction,
    error::Result,
    fill::fill,
    grid::{Grid, TEXT_INSIDE_SPACING},
    placement::Placement,
    scheduler::{schedule, SearchStats},
    word::{Word, WordList},
};

pub struct Puzzle {
    pub grid: Grid,
    pub seed: Seed,
    pub word_list: WordList,
    pub word_key: WordKey,
    pub stats: SearchStats,
}

/// Answer key: where each word starts, 1-based, and which way it reads.
#[derive(Default)]
pub struct WordKey(BTreeMap<String, WordLocation>);

impl std::ops::Deref for WordKey {
    type Target = BTreeMap<String, WordLocation>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for WordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (
            word,
            WordLocation {
                start_row,
                start_col,
                direction,
            },
        ) in self.0.iter()
        {
            writeln!(f, "{word}: (row {start_row}, col {start_col}, {direction})")?
        }

        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordLocation {
    pub start_row: usize,
    pub start_col: usize,
    pub direction: Direction,
}

impl From<Placement> for WordLocation {
    fn from(placement: Placement) -> Self {
        Self {
            start_row: placement.y + 1,
            start_col: placement.x + 1,
            direction: placement.direction,
        }
    }
}

impl std::fmt::Display for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.grid)?;
        writeln!(f, "Word List ({}):", self.word_list.len())?;
        writeln!(f)?;
        let n_columns = (self.grid.width() * (1 + TEXT_INSIDE_SPACING.len()))
            / (self.word_list.max_word_len() + 4);
        self.word_list.to_text_columns(f, n_columns)?;
        Ok(())
    }
}

impl Puzzle {
    /// Places every word and fills the rest of the grid. Nothing partial is
    /// returned: either every word is in the grid or this fails.
    pub fn generate(config: &GeneratorConfig, word_list: WordList) -> Result<Self> {
        config.validate()?;
        let seed = match config.seed {
            Some(seed) => seed,
            None => Seed::random()?,
        };
        let mut rng = StdRng::from_seed(seed.0);

        let blank = Grid::new(config.width, config.height, config.placeholder);
        let solution = schedule(
            &word_list,
            blank,
            config.strategy,
            config.limits(),
            &mut rng,
        )?;

        let mut grid = solution.grid;
        fill(&mut grid, &mut rng);
        info!(
            "{}x{} puzzle from seed {seed}: {} placements, {} backtracks",
            grid.width(),
            grid.height(),
            solution.stats.placements,
            solution.stats.backtracks
        );

        let word_key = WordKey(
            solution
                .placements
                .into_iter()
                .map(|(word, placement)| (word.to_string(), placement.into()))
                .collect(),
        );

        Ok(Self {
            grid,
            seed,
            word_list,
            word_key,
            stats: solution.stats,
        })
    }

    /// Convenience for callers holding plain strings.
    pub fn from_words<S: AsRef<str>>(
        config: &GeneratorConfig,
        words: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let word_list = words
            .into_iter()
            .map(|word| Word::new(word.as_ref()))
            .collect::<Result<WordList>>()?;
        Self::generate(config, word_list)
    }
}
