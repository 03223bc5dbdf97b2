//! Prefix tree of banned phrases and the scans that run text against it.
//!
//! All four scans share the traversal implemented by [`Walker`], and differ only in what they do
//! with a candidate once it dies or completes:
//!
//! | Scan | On a completed phrase | On a dead candidate |
//! |---|---|---|
//! | [`filter`] | drop the span, restart after it | keep the candidate's first character |
//! | [`replace`] | mask the span, keep extending | backtrack |
//! | [`validate`] | return the span | backtrack |
//! | [`find_all`] | record the span, keep extending | backtrack |
//!
//! Because `filter` and `validate` restart at the first completed phrase, a text containing
//! `"badword"` is reported as `"bad"` when both phrases are loaded, while `replace` and
//! `find_all` go on to the longer phrase.
//!
//! [`filter`]: Trie::filter
//! [`replace`]: Trie::replace
//! [`validate`]: Trie::validate
//! [`find_all`]: Trie::find_all

use crate::{
    node::{Node, NodeId, ROOT},
    walker::{Step, Walker},
};
use hashbrown::HashSet;

/// A prefix tree of phrases, keyed by `char`.
///
/// Nodes live in a single arena owned by the `Trie`, with the root at index 0. Deleting a phrase
/// only clears its end-of-word flag, so re-adding it later reuses the existing path.
///
/// `add` and `del` take `&mut self`; for concurrent readers, build a new `Trie` and publish it
/// through a [`Registry`] instead of mutating a shared one.
///
/// [`Registry`]: crate::Registry
#[derive(Clone, Debug)]
pub struct Trie {
    nodes: Vec<Node>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Creates an empty `Trie` containing only the root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::root()],
        }
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Follows `phrase` from the root, returning the node it ends on.
    fn walk(&self, phrase: &str) -> Option<NodeId> {
        phrase
            .chars()
            .try_fold(ROOT, |current, c| self.nodes[current].child(c))
    }

    /// Inserts `phrase`, creating any missing nodes along its path.
    ///
    /// Inserting the same phrase twice is the same as inserting it once. The empty phrase is
    /// ignored.
    pub fn add(&mut self, phrase: &str) {
        let mut current = ROOT;
        for c in phrase.chars() {
            current = match self.nodes[current].child(c) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::new(c));
                    self.nodes[current].link(c, next);
                    next
                }
            };
        }
        self.nodes[current].mark_end_of_word();
    }

    /// Inserts every phrase in `phrases`.
    pub fn add_all<I>(&mut self, phrases: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for phrase in phrases {
            self.add(phrase.as_ref());
        }
    }

    /// Soft-deletes `phrase`.
    ///
    /// The terminal node stays in place with its end-of-word flag cleared. If the phrase's path
    /// does not exist, nothing happens.
    pub fn del(&mut self, phrase: &str) {
        if let Some(end) = self.walk(phrase) {
            self.nodes[end].soft_delete();
        }
    }

    /// Soft-deletes every phrase in `phrases`.
    pub fn del_all<I>(&mut self, phrases: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for phrase in phrases {
            self.del(phrase.as_ref());
        }
    }

    /// Returns whether `phrase` is currently a live phrase of this trie.
    #[must_use]
    pub fn contains(&self, phrase: &str) -> bool {
        self.walk(phrase)
            .map_or(false, |end| self.nodes[end].is_end_of_word())
    }

    /// Number of nodes in the arena, including the root and soft-deleted paths.
    #[inline]
    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no live phrase remains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.nodes.iter().any(Node::is_end_of_word)
    }

    /// Returns every live phrase, sorted.
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::new();
        let mut stack = vec![(ROOT, String::new())];
        while let Some((id, prefix)) = stack.pop() {
            let node = &self.nodes[id];
            if node.is_end_of_word() {
                words.push(prefix.clone());
            }
            if node.is_leaf() {
                continue;
            }
            for child in node.children() {
                let mut path = prefix.clone();
                path.push(self.nodes[child].codepoint);
                stack.push((child, path));
            }
        }
        words.sort_unstable();
        words
    }

    /// Returns a copy of `text` with every detected phrase removed.
    ///
    /// Only the first phrase completed from each starting character is removed; scanning resumes
    /// right after it.
    ///
    /// # Example
    /// ```
    /// use phrase_filter::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.add("bad");
    ///
    /// assert_eq!(trie.filter("this is a bad example"), "this is a  example");
    /// ```
    #[must_use]
    pub fn filter(&self, text: &str) -> String {
        let chars = text.chars().collect::<Vec<_>>();
        let mut output = String::with_capacity(text.len());
        let mut walker = Walker::new();

        while walker.position < chars.len() {
            match walker.step(self, &chars) {
                Step::Word(_) => walker.restart(),
                Step::Prefix(child) if !walker.at_last(chars.len()) => walker.descend(child),
                _ => {
                    output.push(chars[walker.left]);
                    walker.backtrack();
                }
            }
        }
        output.extend(&chars[walker.left..]);
        output
    }

    /// Returns a copy of `text` with every character of every detected phrase replaced by `mask`.
    ///
    /// A completed phrase keeps extending, so when a longer phrase shares its prefix the mask
    /// grows to cover the longer phrase. The result always has as many characters as `text`.
    ///
    /// # Example
    /// ```
    /// use phrase_filter::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.add_all(["bad", "badword"]);
    ///
    /// assert_eq!(trie.replace("this is badword", '*'), "this is *******");
    /// ```
    #[must_use]
    pub fn replace(&self, text: &str, mask: char) -> String {
        let chars = text.chars().collect::<Vec<_>>();
        // Lookups always read `chars`, never the partially masked output.
        let mut masked = chars.clone();
        let mut walker = Walker::new();

        while walker.position < chars.len() {
            match walker.step(self, &chars) {
                Step::Word(child) => {
                    masked[walker.span()].fill(mask);
                    walker.descend(child);
                }
                Step::Prefix(child) if !walker.at_last(chars.len()) => walker.descend(child),
                _ => walker.backtrack(),
            }
        }
        masked.into_iter().collect()
    }

    /// Returns the first detected phrase, if any.
    fn first_match(&self, text: &str) -> Option<String> {
        let chars = text.chars().collect::<Vec<_>>();
        let mut walker = Walker::new();

        while walker.position < chars.len() {
            match walker.step(self, &chars) {
                Step::Word(_) => return Some(chars[walker.span()].iter().collect()),
                Step::Prefix(child) if !walker.at_last(chars.len()) => walker.descend(child),
                _ => walker.backtrack(),
            }
        }
        None
    }

    /// Checks whether `text` is free of phrases.
    ///
    /// Returns `(true, "")` for clean text, or `(false, phrase)` with the first phrase found.
    /// Scanning stops at the first hit.
    #[must_use]
    pub fn validate(&self, text: &str) -> (bool, String) {
        match self.first_match(text) {
            Some(phrase) => (false, phrase),
            None => (true, String::new()),
        }
    }

    /// The inverse of [`validate`]: returns `(true, phrase)` if a phrase is found.
    ///
    /// [`validate`]: Trie::validate
    #[must_use]
    pub fn find_in(&self, text: &str) -> (bool, String) {
        let (valid, first) = self.validate(text);
        (!valid, first)
    }

    /// Returns every distinct phrase found in `text`, in order of first occurrence.
    ///
    /// Completed phrases keep extending, so both a phrase and a longer phrase sharing its prefix
    /// are reported.
    ///
    /// # Example
    /// ```
    /// use phrase_filter::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.add_all(["bad", "badword"]);
    ///
    /// assert_eq!(trie.find_all("badword"), vec!["bad", "badword"]);
    /// ```
    #[must_use]
    pub fn find_all(&self, text: &str) -> Vec<String> {
        let chars = text.chars().collect::<Vec<_>>();
        let mut found = Vec::new();
        let mut walker = Walker::new();

        while walker.position < chars.len() {
            let step = walker.step(self, &chars);
            let child = match step {
                Step::Dead => {
                    walker.backtrack();
                    continue;
                }
                Step::Prefix(child) | Step::Word(child) => child,
            };
            if let Step::Word(_) = step {
                found.push(chars[walker.span()].iter().collect::<String>());
            }
            if walker.at_last(chars.len()) {
                walker.backtrack();
            } else {
                walker.descend(child);
            }
        }

        let mut seen = HashSet::new();
        found.retain(|phrase| seen.insert(phrase.clone()));
        found
    }
}

#[cfg(test)]
mod tests {
    use crate::Trie;

    fn trie(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        trie.add_all(words);
        trie
    }

    #[test]
    fn add() {
        let trie = trie(&["foo"]);

        assert!(trie.contains("foo"));
        assert!(!trie.contains("fo"));
        assert!(!trie.contains("food"));
    }

    #[test]
    fn add_duplicate() {
        let mut trie = trie(&["foo"]);
        let nodes = trie.nodes.len();
        trie.add("foo");

        assert_eq!(trie.nodes.len(), nodes);
        assert_eq!(trie.words(), vec!["foo"]);
    }

    #[test]
    fn add_shares_prefix() {
        let trie = trie(&["bad", "badword"]);

        // root + b, a, d + w, o, r, d
        assert_eq!(trie.node_count(), 8);
    }

    #[test]
    fn add_empty() {
        let trie = trie(&[""]);

        assert!(trie.is_empty());
        assert!(!trie.contains(""));
        assert_eq!(trie.nodes.len(), 1);
        assert_eq!(trie.validate("anything"), (true, String::new()));
    }

    #[test]
    fn del() {
        let mut trie = trie(&["foo"]);
        trie.del("foo");

        assert!(!trie.contains("foo"));
        assert!(trie.is_empty());
        assert_eq!(trie.validate("foo"), (true, String::new()));
    }

    #[test]
    fn del_keeps_nodes() {
        let mut trie = trie(&["bad", "badword"]);
        let nodes = trie.nodes.len();
        trie.del("bad");

        assert_eq!(trie.nodes.len(), nodes);
        assert!(trie.contains("badword"));
        assert_eq!(trie.find_all("badword"), vec!["badword"]);
    }

    #[test]
    fn del_missing() {
        let mut trie = trie(&["foo"]);
        trie.del("bar");
        trie.del("fooo");
        trie.del("");

        assert_eq!(trie.words(), vec!["foo"]);
    }

    #[test]
    fn del_prefix_only() {
        let mut trie = trie(&["foo"]);
        trie.del("fo");

        assert!(trie.contains("foo"));
    }

    #[test]
    fn re_add_after_del() {
        let mut trie = trie(&["foo"]);
        let nodes = trie.nodes.len();
        trie.del("foo");
        trie.add("foo");

        assert_eq!(trie.nodes.len(), nodes);
        let fresh = self::trie(&["foo"]);
        for text in ["foo", "a foo b", "fofoo", "f"] {
            assert_eq!(trie.validate(text), fresh.validate(text));
            assert_eq!(trie.filter(text), fresh.filter(text));
            assert_eq!(trie.replace(text, '*'), fresh.replace(text, '*'));
            assert_eq!(trie.find_all(text), fresh.find_all(text));
        }
    }

    #[test]
    fn words() {
        let trie = trie(&["word", "bad", "badword"]);

        assert_eq!(trie.words(), vec!["bad", "badword", "word"]);
    }

    #[test]
    fn filter() {
        let trie = trie(&["bad", "badword", "word"]);

        assert_eq!(trie.filter("this is a bad example"), "this is a  example");
    }

    #[test]
    fn filter_takes_first_completed() {
        let trie = trie(&["bad", "badword"]);

        // Restarting after "bad" leaves the rest of "badword" behind.
        assert_eq!(trie.filter("badword"), "word");
    }

    #[test]
    fn filter_adjacent() {
        let trie = trie(&["foo"]);

        assert_eq!(trie.filter("foofoo"), "");
        assert_eq!(trie.filter("ffoo"), "f");
    }

    #[test]
    fn filter_partial_at_end() {
        let trie = trie(&["foo"]);

        assert_eq!(trie.filter("xfo"), "xfo");
        assert_eq!(trie.filter("fo"), "fo");
    }

    #[test]
    fn filter_empty() {
        let trie = trie(&["foo"]);

        assert_eq!(trie.filter(""), "");
    }

    #[test]
    fn filter_multibyte() {
        let trie = trie(&["bãr"]);

        assert_eq!(trie.filter("foo bãr baz"), "foo  baz");
    }

    #[test]
    fn replace() {
        let trie = trie(&["bad", "badword", "word"]);

        assert_eq!(trie.replace("this is badword", '*'), "this is *******");
    }

    #[test]
    fn replace_custom_mask() {
        let trie = trie(&["foo"]);

        assert_eq!(trie.replace("a foo b", '#'), "a ### b");
    }

    #[test]
    fn replace_multibyte_keeps_char_count() {
        let trie = trie(&["bãr"]);
        let output = trie.replace("xbãrx", '*');

        assert_eq!(output, "x***x");
        assert_eq!(output.chars().count(), 5);
    }

    #[test]
    fn replace_mask_inside_phrase() {
        // A mask character that is itself part of a phrase must not create new matches.
        let trie = trie(&["ab", "*b"]);

        assert_eq!(trie.replace("abb", '*'), "**b");
    }

    #[test]
    fn replace_overlapping() {
        let trie = trie(&["abc", "bcd"]);

        assert_eq!(trie.replace("abcd", '*'), "****");
    }

    #[test]
    fn validate() {
        let trie = trie(&["bad", "badword", "word"]);

        assert_eq!(trie.validate("a bad thing"), (false, "bad".to_owned()));
        assert_eq!(trie.validate("a good thing"), (true, String::new()));
    }

    #[test]
    fn validate_first_hit() {
        let trie = trie(&["bad", "badword", "word"]);

        assert_eq!(trie.validate("badword"), (false, "bad".to_owned()));
        assert_eq!(trie.validate("word then bad"), (false, "word".to_owned()));
    }

    #[test]
    fn validate_empty() {
        let trie = trie(&["foo"]);

        assert_eq!(trie.validate(""), (true, String::new()));
    }

    #[test]
    fn find_in() {
        let trie = trie(&["bad"]);

        assert_eq!(trie.find_in("so bad"), (true, "bad".to_owned()));
        assert_eq!(trie.find_in("so good"), (false, String::new()));
    }

    #[test]
    fn find_all() {
        let trie = trie(&["bad", "badword"]);

        assert_eq!(trie.find_all("badword"), vec!["bad", "badword"]);
    }

    #[test]
    fn find_all_nested_and_later() {
        let trie = trie(&["bad", "badword", "word"]);

        assert_eq!(trie.find_all("badword"), vec!["bad", "badword", "word"]);
    }

    #[test]
    fn find_all_dedup() {
        let trie = trie(&["foo", "bar"]);

        assert_eq!(trie.find_all("foo bar foo foo bar"), vec!["foo", "bar"]);
    }

    #[test]
    fn find_all_none() {
        let trie = trie(&["foo"]);

        assert!(trie.find_all("nothing here").is_empty());
        assert!(trie.find_all("").is_empty());
    }

    #[test]
    fn find_all_word_at_end() {
        let trie = trie(&["foo"]);

        assert_eq!(trie.find_all("xxfoo"), vec!["foo"]);
    }
}
