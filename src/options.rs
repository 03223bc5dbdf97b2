//! Configuration for an [`Engine`].
//!
//! [`Engine`]: crate::Engine

use crate::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::{borrow::Cow, str::FromStr};

/// Separators and symbols commonly inserted to break up a phrase.
pub const DEFAULT_NOISE_PATTERN: &str = r"[\|\s&%$@*]+";

static DEFAULT_NOISE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(DEFAULT_NOISE_PATTERN).expect("default noise pattern is a valid regex")
});

/// How [`Engine::replace`] masks detected phrases.
///
/// [`Engine::replace`]: crate::Engine::replace
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CensorMode {
    /// Replace every character of the phrase with the given character.
    ReplaceAllWith(char),
}

impl Default for CensorMode {
    fn default() -> Self {
        CensorMode::ReplaceAllWith('*')
    }
}

impl CensorMode {
    #[inline]
    pub(crate) fn mask(self) -> char {
        match self {
            CensorMode::ReplaceAllWith(c) => c,
        }
    }
}

/// A compiled pattern of characters stripped from text before detection.
///
/// Every match of the pattern is deleted. The default pattern removes runs of `|`, whitespace,
/// `&`, `%`, `$`, `@`, and `*`.
#[derive(Clone, Debug)]
pub struct NoisePattern(Regex);

impl NoisePattern {
    /// Compiles `pattern`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidNoisePattern`] if `pattern` is not a valid regular expression.
    ///
    /// [`Error::InvalidNoisePattern`]: crate::Error::InvalidNoisePattern
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self(Regex::new(pattern)?))
    }

    /// The source text of the pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Deletes every match of the pattern from `text`.
    ///
    /// Borrows `text` unchanged when nothing matches.
    #[must_use]
    pub fn remove<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.0.replace_all(text, "")
    }
}

impl Default for NoisePattern {
    fn default() -> Self {
        Self(DEFAULT_NOISE.clone())
    }
}

impl FromStr for NoisePattern {
    type Err = crate::Error;

    fn from_str(pattern: &str) -> Result<Self> {
        Self::new(pattern)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Options {
    pub censor_mode: CensorMode,
    pub noise_pattern: NoisePattern,
}
