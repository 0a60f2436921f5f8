use std::time::Duration;

use crate::{
    error::{Error, Result},
    grid::DEFAULT_PLACEHOLDER,
    scheduler::{BacktrackStrategy, SearchLimits},
};

/// Seed for the puzzle's random source. Printed as hex so a puzzle can be
/// regenerated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seed(pub [u8; 32]);

impl Seed {
    pub fn random() -> Result<Self> {
        let mut seed = [0u8; 32];
        getrandom::getrandom(&mut seed).map_err(|err| Error::Entropy(err.to_string()))?;
        Ok(Self(seed))
    }
}

impl std::str::FromStr for Seed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = hex::decode(s.trim())
            .map_err(|decode_err| Error::InvalidConfig(format!("decoding hex seed: {decode_err}")))?;
        let seed = <[u8; 32]>::try_from(bytes.as_slice())
            .map_err(|_| Error::InvalidConfig("seed is not 32-bytes long".into()))?;
        Ok(Self(seed))
    }
}

impl std::fmt::Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl From<u64> for Seed {
    /// Spreads a small number over the full seed, handy in tests.
    fn from(value: u64) -> Self {
        let mut seed = [0u8; 32];
        for chunk in seed.chunks_mut(8) {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        Self(seed)
    }
}

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    pub placeholder: char,
    /// Drawn from OS entropy when unset.
    pub seed: Option<Seed>,
    pub strategy: BacktrackStrategy,
    pub max_backtracks: Option<usize>,
    pub time_limit: Option<Duration>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 12,
            height: 12,
            placeholder: DEFAULT_PLACEHOLDER,
            seed: None,
            strategy: BacktrackStrategy::default(),
            max_backtracks: None,
            time_limit: None,
        }
    }
}

impl GeneratorConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: impl Into<Seed>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "grid must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.placeholder.is_alphabetic() || self.placeholder.is_whitespace() {
            return Err(Error::InvalidConfig(format!(
                "placeholder {:?} must not be a letter or whitespace",
                self.placeholder
            )));
        }
        Ok(())
    }

    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            max_backtracks: self.max_backtracks,
            time_limit: self.time_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_hex_roundtrip() {
        let text = "00".repeat(31) + "ff";
        let seed: Seed = text.parse().unwrap();
        assert_eq!(seed.0[31], 0xff);
        assert_eq!(seed.to_string(), text);
    }

    #[test]
    fn seed_must_be_32_bytes() {
        assert!(matches!("abcd".parse::<Seed>(), Err(Error::InvalidConfig(_))));
        assert!(matches!("zz".parse::<Seed>(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn validates_dimensions_and_placeholder() {
        assert!(GeneratorConfig::new(4, 4).validate().is_ok());
        assert!(GeneratorConfig::new(0, 4).validate().is_err());
        let config = GeneratorConfig {
            placeholder: 'Q',
            ..GeneratorConfig::new(4, 4)
        };
        assert!(config.validate().is_err());
        let config = GeneratorConfig {
            placeholder: ' ',
            ..GeneratorConfig::new(4, 4)
        };
        assert!(config.validate().is_err());
    }
}
