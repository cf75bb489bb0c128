use crate::error::QuizError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

pub const SEED_VAR: &str = "VOCAB_QUIZ_SEED";
pub const LOG_VAR: &str = "VOCAB_QUIZ_LOG";

/// Runtime options read from the environment. Everything is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizConfig {
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl QuizConfig {
    pub fn from_env() -> Result<Self, QuizError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, QuizError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match lookup(SEED_VAR) {
            Some(raw) if !raw.trim().is_empty() => {
                let seed = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| QuizError::InvalidConfig {
                        key: SEED_VAR,
                        value: raw.clone(),
                    })?;
                Some(seed)
            }
            _ => None,
        };

        let log_path = lookup(LOG_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { seed, log_path })
    }

    /// Shuffle RNG: fixed when a seed is configured, otherwise from OS entropy.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}
