//! The public filtering API over a single [`Trie`].

use crate::{
    error::Result,
    options::{CensorMode, NoisePattern, Options},
    Trie,
};
use std::borrow::Cow;
use tracing::trace;

/// A [`Trie`] of banned phrases together with its [`Options`].
///
/// `filter`, `replace`, and `find_all` scan the text as given. `validate` and `find_in` strip
/// noise from the text first, so that `"b|a|d"` is caught by them but not by the other three.
///
/// Methods taking `&mut self` must not run while the same `Engine` is being scanned elsewhere.
/// Shared engines are swapped wholesale through a [`Registry`] instead.
///
/// [`Registry`]: crate::Registry
#[derive(Clone, Debug, Default)]
pub struct Engine {
    trie: Trie,
    options: Options,
}

impl Engine {
    /// Creates an empty `Engine` with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self {
            trie: Trie::new(),
            options,
        }
    }

    /// Creates an `Engine` with default options, loaded with `words`.
    ///
    /// # Example
    /// ```
    /// use phrase_filter::Engine;
    ///
    /// let engine = Engine::from_words(["bad", "badword", "word"]);
    ///
    /// assert_eq!(engine.filter("this is a bad example"), "this is a  example");
    /// assert_eq!(engine.validate("a bad thing"), (false, "bad".to_owned()));
    /// ```
    #[must_use]
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::from_words_with_options(words, Options::default())
    }

    #[must_use]
    pub fn from_words_with_options<I>(words: I, options: Options) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut engine = Self::with_options(options);
        engine.add_words(words);
        engine
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[inline]
    #[must_use]
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Replaces the noise pattern used by [`remove_noise`].
    ///
    /// # Errors
    /// Returns [`Error::InvalidNoisePattern`] if `pattern` does not compile, leaving the current
    /// pattern in place.
    ///
    /// [`remove_noise`]: Engine::remove_noise
    /// [`Error::InvalidNoisePattern`]: crate::Error::InvalidNoisePattern
    pub fn set_noise_pattern(&mut self, pattern: &str) -> Result<()> {
        self.options.noise_pattern = NoisePattern::new(pattern)?;
        trace!(pattern, "replaced noise pattern");
        Ok(())
    }

    pub fn set_censor_mode(&mut self, censor_mode: CensorMode) {
        self.options.censor_mode = censor_mode;
    }

    pub fn add_word(&mut self, word: &str) {
        self.trie.add(word);
    }

    pub fn add_words<I>(&mut self, words: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.trie.add_all(words);
    }

    pub fn del_word(&mut self, word: &str) {
        self.trie.del(word);
    }

    pub fn del_words<I>(&mut self, words: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.trie.del_all(words);
    }

    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> Vec<String> {
        self.trie.words()
    }

    /// See [`Trie::filter`]. No noise is removed.
    #[must_use]
    pub fn filter(&self, text: &str) -> String {
        self.trie.filter(text)
    }

    /// Masks detected phrases according to the configured [`CensorMode`]. No noise is removed.
    #[must_use]
    pub fn replace(&self, text: &str) -> String {
        self.replace_with(text, self.options.censor_mode.mask())
    }

    #[must_use]
    pub fn replace_with(&self, text: &str, mask: char) -> String {
        self.trie.replace(text, mask)
    }

    /// Removes noise from `text`, then looks for a phrase.
    ///
    /// Returns `(true, phrase)` with the first phrase found, or `(false, "")`.
    #[must_use]
    pub fn find_in(&self, text: &str) -> (bool, String) {
        self.trie.find_in(&self.remove_noise(text))
    }

    /// See [`Trie::find_all`]. No noise is removed.
    #[must_use]
    pub fn find_all(&self, text: &str) -> Vec<String> {
        self.trie.find_all(text)
    }

    /// Removes noise from `text`, then checks that it is free of phrases.
    ///
    /// Returns `(true, "")` for clean text, or `(false, phrase)` with the first phrase found.
    #[must_use]
    pub fn validate(&self, text: &str) -> (bool, String) {
        self.trie.validate(&self.remove_noise(text))
    }

    #[must_use]
    pub fn remove_noise<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.options.noise_pattern.remove(text)
    }
}
