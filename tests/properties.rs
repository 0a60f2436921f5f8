use proptest::prelude::*;
use rand::{rngs::StdRng, seq::SliceRandom as _, SeedableRng as _};

use wordsearch::{
    finder::{find_word_positions, locate_word},
    placement::place_word,
    GeneratorConfig, Grid, Puzzle, Word,
};

fn word_strategy(max_len: usize) -> impl Strategy<Value = Word> {
    proptest::string::string_regex(&format!("[A-E]{{1,{max_len}}}"))
        .expect("valid regex")
        .prop_map(|s| Word::new(&s).expect("letters only"))
}

/// A grid with a few short words already on it.
fn seeded_grid() -> impl Strategy<Value = Grid> {
    (
        3usize..7,
        3usize..7,
        proptest::collection::vec(word_strategy(3), 0..4),
        any::<u64>(),
    )
        .prop_map(|(width, height, words, seed)| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut grid = Grid::new(width, height, '.');
            for word in &words {
                let positions = find_word_positions(word, &grid).expect("dispatch is consistent");
                if let Some(p) = positions.choose(&mut rng) {
                    grid = place_word(word, p, &grid);
                }
            }
            grid
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_candidate_is_legal(grid in seeded_grid(), word in word_strategy(6)) {
        for p in find_word_positions(&word, &grid).unwrap() {
            for (n, c) in word.letters().iter().enumerate() {
                let (x, y) = p.direction.step(p.x, p.y, n as isize).expect("in bounds");
                let cell = grid.get(x, y).expect("in bounds");
                prop_assert!(cell == grid.placeholder() || cell == *c);
            }
        }
    }

    #[test]
    fn enumeration_is_repeatable(grid in seeded_grid(), word in word_strategy(5)) {
        prop_assert_eq!(
            find_word_positions(&word, &grid).unwrap(),
            find_word_positions(&word, &grid).unwrap()
        );
    }

    #[test]
    fn placing_touches_only_the_footprint(grid in seeded_grid(), word in word_strategy(5)) {
        for p in find_word_positions(&word, &grid).unwrap().iter().take(8) {
            let placed = place_word(&word, p, &grid);
            let footprint: Vec<(usize, usize)> = p.cells(word.len()).collect();
            prop_assert_eq!(footprint.len(), word.len());
            for (x, y, c) in grid.cells() {
                if !footprint.contains(&(x, y)) {
                    prop_assert_eq!(placed.get(x, y), Some(c));
                }
            }
            prop_assert!(locate_word(&word, &placed).is_some());
        }
    }

    #[test]
    fn generated_puzzles_are_complete_and_reproducible(
        words in proptest::collection::vec(word_strategy(4), 1..5),
        seed in any::<u64>(),
    ) {
        let config = GeneratorConfig {
            max_backtracks: Some(500),
            ..GeneratorConfig::new(6, 6).with_seed(seed)
        };
        let list = words.iter().map(Word::to_string).collect::<Vec<_>>();
        if let Ok(puzzle) = Puzzle::from_words(&config, &list) {
            prop_assert_eq!(puzzle.grid.placeholder_count(), 0);
            for word in &words {
                prop_assert!(locate_word(word, &puzzle.grid).is_some());
            }
            let again = Puzzle::from_words(&config, &list).unwrap();
            prop_assert_eq!(puzzle.grid, again.grid);
        }
    }
}
