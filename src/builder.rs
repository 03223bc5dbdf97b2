use crate::{
    error::Result,
    options::{CensorMode, NoisePattern, Options},
    Engine,
};

/// Assembles an [`Engine`] from its phrases and configuration.
///
/// # Example
/// ```
/// use phrase_filter::{CensorMode, EngineBuilder};
///
/// let engine = EngineBuilder::new()
///     .words(&["foo", "bar"])
///     .noise_pattern("[-_]")
///     .censor_mode(CensorMode::ReplaceAllWith('#'))
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.replace("foo baz"), "### baz");
/// assert_eq!(engine.find_in("f-o_o"), (true, "foo".to_owned()));
/// ```
#[derive(Clone, Debug, Default)]
pub struct EngineBuilder {
    words: Vec<String>,
    noise_pattern: Option<String>,
    censor_mode: CensorMode,
}

impl EngineBuilder {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn word<S>(&mut self, word: &S) -> &mut Self
    where
        S: ToString + ?Sized,
    {
        self.words.push(word.to_string());
        self
    }

    #[inline]
    pub fn words<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.words.extend(words.into_iter().map(|word| word.to_string()));
        self
    }

    /// Overrides the default noise pattern. Compiled on [`build`].
    ///
    /// [`build`]: EngineBuilder::build
    #[inline]
    pub fn noise_pattern<S>(&mut self, pattern: &S) -> &mut Self
    where
        S: ToString + ?Sized,
    {
        self.noise_pattern = Some(pattern.to_string());
        self
    }

    #[inline]
    pub fn censor_mode(&mut self, censor_mode: CensorMode) -> &mut Self {
        self.censor_mode = censor_mode;
        self
    }

    /// Builds the `Engine`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidNoisePattern`] if the configured noise pattern does not compile.
    ///
    /// [`Error::InvalidNoisePattern`]: crate::Error::InvalidNoisePattern
    pub fn build(&self) -> Result<Engine> {
        let noise_pattern = match &self.noise_pattern {
            Some(pattern) => NoisePattern::new(pattern)?,
            None => NoisePattern::default(),
        };
        let options = Options {
            censor_mode: self.censor_mode,
            noise_pattern,
        };
        Ok(Engine::from_words_with_options(&self.words, options))
    }
}

#[cfg(test)]
mod tests {
    use crate::{CensorMode, EngineBuilder, Error, DEFAULT_NOISE_PATTERN};

    #[test]
    fn defaults() {
        let engine = EngineBuilder::new().build().unwrap();

        assert!(engine.is_empty());
        assert_eq!(engine.options().censor_mode, CensorMode::ReplaceAllWith('*'));
        assert_eq!(engine.options().noise_pattern.as_str(), DEFAULT_NOISE_PATTERN);
    }

    #[test]
    fn word_and_words() {
        let engine = EngineBuilder::new()
            .word("foo")
            .words(vec![String::from("bar"), String::from("baz")])
            .build()
            .unwrap();

        assert_eq!(engine.words(), vec!["bar", "baz", "foo"]);
    }

    #[test]
    fn censor_mode() {
        let engine = EngineBuilder::new()
            .word("foo")
            .censor_mode(CensorMode::ReplaceAllWith('#'))
            .build()
            .unwrap();

        assert_eq!(engine.replace("foo"), "###");
    }

    #[test]
    fn invalid_noise_pattern() {
        let result = EngineBuilder::new().word("foo").noise_pattern("(").build();

        assert!(matches!(result, Err(Error::InvalidNoisePattern(_))));
    }
}
