//! Longest-first placement with backtracking.
//!
//! Pending words are kept sorted by ascending length and the next word is
//! always taken from the end, so longer words are committed first. Each
//! successful placement pushes a checkpoint holding its own copy of the
//! grid; backtracking pops one and resumes from the grid underneath it.

use std::time::{Duration, Instant};

use log::{debug, info, trace};
use rand::{seq::SliceRandom as _, Rng};

use crate::{
    error::{Error, Result},
    finder::find_word_positions,
    grid::Grid,
    placement::{place_word, Placement},
    word::Word,
};

/// What to do with the word popped off the checkpoint stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum BacktrackStrategy {
    /// Re-enumerate and pick a fresh random placement. The search can revisit
    /// the same arrangement, so it should run with a limit.
    PopAndRetry,
    /// Try the placements not yet tried at that checkpoint before backtracking
    /// further. Exhaustive, always terminates.
    #[default]
    Alternatives,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_backtracks: Option<usize>,
    pub time_limit: Option<Duration>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub placements: usize,
    pub backtracks: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SchedulerState {
    Selecting,
    Searching,
    Placed,
    Backtrack,
    Done,
    Failed,
}

#[derive(Clone, Debug)]
struct Checkpoint {
    word: Word,
    placement: Placement,
    grid: Grid,
    alternatives: Vec<Placement>,
}

#[derive(Clone, Debug)]
pub struct Solution {
    pub grid: Grid,
    /// In the order the words ended up placed.
    pub placements: Vec<(Word, Placement)>,
    pub stats: SearchStats,
}

pub struct Scheduler<'r, R: Rng + ?Sized> {
    blank: Grid,
    pending: Vec<Word>,
    stack: Vec<Checkpoint>,
    current: Option<Word>,
    retry: Option<Vec<Placement>>,
    candidates: Vec<Placement>,
    state: SchedulerState,
    strategy: BacktrackStrategy,
    limits: SearchLimits,
    started: Instant,
    stats: SearchStats,
    rng: &'r mut R,
}

impl<'r, R: Rng + ?Sized> Scheduler<'r, R> {
    /// Fails with [`Error::WordTooLong`] before any search if the longest
    /// word can't fit in either dimension.
    pub fn new(
        words: &[Word],
        blank: Grid,
        strategy: BacktrackStrategy,
        limits: SearchLimits,
        rng: &'r mut R,
    ) -> Result<Self> {
        if let Some(word) = words
            .iter()
            .find(|word| word.letters().contains(&blank.placeholder()))
        {
            return Err(Error::InvalidWord {
                word: word.to_string(),
                reason: "word contains the placeholder character",
            });
        }

        let mut pending = words.to_vec();
        pending.sort_by_key(Word::len);
        if let Some(longest) = pending.last() {
            if longest.len() > blank.width() && longest.len() > blank.height() {
                return Err(Error::WordTooLong {
                    word: longest.to_string(),
                    width: blank.width(),
                    height: blank.height(),
                });
            }
        }

        Ok(Self {
            blank,
            pending,
            stack: vec![],
            current: None,
            retry: None,
            candidates: vec![],
            state: SchedulerState::Selecting,
            strategy,
            limits,
            started: Instant::now(),
            stats: SearchStats::default(),
            rng,
        })
    }

    fn grid(&self) -> &Grid {
        self.stack.last().map_or(&self.blank, |checkpoint| &checkpoint.grid)
    }

    fn current_word(&self) -> String {
        self.current.as_ref().map(Word::to_string).unwrap_or_default()
    }

    pub fn run(mut self) -> Result<Solution> {
        loop {
            let next = match self.state {
                SchedulerState::Selecting => self.select(),
                SchedulerState::Searching => self.search()?,
                SchedulerState::Placed => self.place(),
                SchedulerState::Backtrack => self.backtrack()?,
                SchedulerState::Done => return Ok(self.finish()),
                SchedulerState::Failed => {
                    return Err(Error::Infeasible {
                        word: self.current_word(),
                        width: self.blank.width(),
                        height: self.blank.height(),
                    })
                }
            };
            trace!("{:?} -> {next:?}", self.state);
            self.state = next;
        }
    }

    fn select(&mut self) -> SchedulerState {
        self.current = self.pending.pop();
        match self.current {
            Some(_) => SchedulerState::Searching,
            None => SchedulerState::Done,
        }
    }

    fn search(&mut self) -> Result<SchedulerState> {
        let Some(word) = &self.current else {
            return Ok(SchedulerState::Selecting);
        };

        if let Some(time_limit) = self.limits.time_limit {
            if self.started.elapsed() >= time_limit {
                return Err(Error::TimedOut {
                    word: word.to_string(),
                    width: self.blank.width(),
                    height: self.blank.height(),
                    backtracks: self.stats.backtracks,
                });
            }
        }

        self.candidates = match self.retry.take() {
            Some(alternatives) => alternatives,
            None => {
                let mut candidates = find_word_positions(word, self.grid())?;
                candidates.shuffle(&mut *self.rng);
                candidates
            }
        };
        debug!("{word}: {} candidate placements", self.candidates.len());

        Ok(if self.candidates.is_empty() {
            SchedulerState::Backtrack
        } else {
            SchedulerState::Placed
        })
    }

    fn place(&mut self) -> SchedulerState {
        let (Some(word), Some(placement)) = (self.current.take(), self.candidates.pop()) else {
            return SchedulerState::Selecting;
        };
        let grid = place_word(&word, &placement, self.grid());
        let alternatives = match self.strategy {
            BacktrackStrategy::Alternatives => std::mem::take(&mut self.candidates),
            BacktrackStrategy::PopAndRetry => vec![],
        };
        debug!("placed {word} at {placement}");
        self.stats.placements += 1;
        self.stack.push(Checkpoint {
            word,
            placement,
            grid,
            alternatives,
        });
        SchedulerState::Selecting
    }

    fn backtrack(&mut self) -> Result<SchedulerState> {
        let Some(failed) = self.current.take() else {
            return Ok(SchedulerState::Selecting);
        };
        let Some(checkpoint) = self.stack.pop() else {
            self.current = Some(failed);
            return Ok(SchedulerState::Failed);
        };

        self.stats.backtracks += 1;
        if let Some(max_backtracks) = self.limits.max_backtracks {
            if self.stats.backtracks > max_backtracks {
                return Err(Error::BacktrackLimit {
                    word: failed.to_string(),
                    width: self.blank.width(),
                    height: self.blank.height(),
                    backtracks: max_backtracks,
                });
            }
        }
        debug!(
            "no room for {failed}, lifting {} from {}",
            checkpoint.word, checkpoint.placement
        );

        // The failed word is at least as long as anything still pending, so
        // pushing it keeps the queue sorted.
        self.pending.push(failed);
        self.current = Some(checkpoint.word);
        self.retry = match self.strategy {
            BacktrackStrategy::Alternatives => Some(checkpoint.alternatives),
            BacktrackStrategy::PopAndRetry => None,
        };
        Ok(SchedulerState::Searching)
    }

    fn finish(self) -> Solution {
        info!(
            "placed {} words with {} backtracks",
            self.stack.len(),
            self.stats.backtracks
        );
        let grid = self.grid().clone();
        let placements = self
            .stack
            .into_iter()
            .map(|checkpoint| (checkpoint.word, checkpoint.placement))
            .collect();
        Solution {
            grid,
            placements,
            stats: self.stats,
        }
    }
}

/// Places every word on `blank`, or explains why it couldn't.
pub fn schedule<R: Rng + ?Sized>(
    words: &[Word],
    blank: Grid,
    strategy: BacktrackStrategy,
    limits: SearchLimits,
    rng: &mut R,
) -> Result<Solution> {
    Scheduler::new(words, blank, strategy, limits, rng)?.run()
}
