use std::io::BufRead;

use crate::error::{Error, Result};

/// A trimmed, uppercased word ready for placement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

impl Word {
    pub fn new(raw: &str) -> Result<Self> {
        let text = raw.trim().to_uppercase();
        if text.is_empty() {
            return Err(Error::EmptyWord);
        }
        if !text.chars().all(char::is_uppercase) {
            return Err(Error::InvalidWord {
                word: text,
                reason: "words may only contain letters with an uppercase form",
            });
        }
        let letters = text.chars().collect();
        Ok(Self { text, letters })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Every index at which `c` occurs.
    pub fn indices_of(&self, c: char) -> impl Iterator<Item = usize> + '_ {
        self.letters
            .iter()
            .enumerate()
            .filter(move |(_, l)| **l == c)
            .map(|(i, _)| i)
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Word::new(s)
    }
}

/// Words in the order given, plus the optional `#` title line.
#[derive(Clone, Debug, Default)]
pub struct WordList {
    pub title: Option<String>,
    words: Vec<Word>,
}

impl std::ops::Deref for WordList {
    type Target = Vec<Word>;

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            title: None,
            words: iter.into_iter().collect(),
        }
    }
}

impl WordList {
    /// One word per line. A line starting with `#` sets the title and blank
    /// lines are skipped.
    pub fn read(input: impl BufRead) -> anyhow::Result<Self> {
        let mut words = vec![];
        let mut title = None::<String>;
        for line in input.lines() {
            let line = line?;
            if let Some(s) = line.strip_prefix('#') {
                title = Some(s.trim().to_owned());
            } else if !line.trim().is_empty() {
                words.push(Word::new(&line)?);
            }
        }

        Ok(Self { title, words })
    }

    pub fn max_word_len(&self) -> usize {
        self.words.iter().map(Word::len).max().unwrap_or(0)
    }

    pub fn to_text_columns(
        &self,
        mut f: impl std::fmt::Write,
        n_columns: usize,
    ) -> Result<(), std::fmt::Error> {
        let n_columns = n_columns.max(1);
        let max_word_len = self.max_word_len();
        let words_per_col = self.words.len().div_ceil(n_columns);
        for row_no in 0..words_per_col {
            for col_no in 0..n_columns {
                if let Some(word) = self.words.get(col_no * words_per_col + row_no) {
                    write!(f, "* {:<max_word_len$}  ", word.as_str())?
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
