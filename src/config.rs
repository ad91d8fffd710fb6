use thiserror::Error;

#[derive(Debug, Clone, Copy)]
pub struct PhraseConfig {
    pub min_len: usize,
    pub max_len: usize,
    pub top: usize,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("min-len must be at least 1")]
    MinLenZero,
    #[error("max-len ({max_len}) must not be smaller than min-len ({min_len})")]
    MaxLenBelowMin { min_len: usize, max_len: usize },
}

impl PhraseConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_len < 1 {
            return Err(ConfigError::MinLenZero);
        }
        if self.max_len < self.min_len {
            return Err(ConfigError::MaxLenBelowMin {
                min_len: self.min_len,
                max_len: self.max_len,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = PhraseConfig {
            min_len: 3,
            max_len: 10,
            top: 10,
        };
        assert_eq!(Ok(()), config.validate());

        let config = PhraseConfig {
            min_len: 1,
            max_len: 1,
            top: 0,
        };
        assert_eq!(Ok(()), config.validate());
    }

    #[test]
    fn test_min_len_zero() {
        let config = PhraseConfig {
            min_len: 0,
            max_len: 10,
            top: 10,
        };
        assert_eq!(Err(ConfigError::MinLenZero), config.validate());
    }

    #[test]
    fn test_max_len_below_min() {
        let config = PhraseConfig {
            min_len: 5,
            max_len: 4,
            top: 10,
        };
        assert_eq!(
            Err(ConfigError::MaxLenBelowMin {
                min_len: 5,
                max_len: 4
            }),
            config.validate()
        );
    }
}
