use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("word {word} is too long to fit in a puzzle of {width}x{height}")]
    WordTooLong {
        word: String,
        width: usize,
        height: usize,
    },

    #[error("cannot place {word} in a {width}x{height} puzzle with this word list")]
    Infeasible {
        word: String,
        width: usize,
        height: usize,
    },

    #[error("gave up on {word} in a {width}x{height} puzzle after {backtracks} backtracks")]
    BacktrackLimit {
        word: String,
        width: usize,
        height: usize,
        backtracks: usize,
    },

    #[error("gave up on {word} in a {width}x{height} puzzle: time limit reached after {backtracks} backtracks")]
    TimedOut {
        word: String,
        width: usize,
        height: usize,
        backtracks: usize,
    },

    #[error("index {index} is out of range for {word}")]
    InvalidIndex { word: String, index: usize },

    #[error("expected {expected} at ({x}, {y}) for {word}[{index}], found {found}")]
    ContractViolation {
        word: String,
        index: usize,
        x: usize,
        y: usize,
        expected: char,
        found: char,
    },

    #[error("empty word in word list")]
    EmptyWord,

    #[error("invalid word {word:?}: {reason}")]
    InvalidWord { word: String, reason: &'static str },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("reading entropy for seed: {0}")]
    Entropy(String),
}
