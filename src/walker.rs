//! Walker for [`Trie`] internal scanning.
//!
//! A [`Walker`] holds the three cursors every scan shares: `left`, the start of the candidate
//! currently being attempted; `position`, the lookahead cursor; and `parent`, the node reached by
//! consuming `text[left..position]`.
//!
//! Each scan repeatedly asks the walker to [`step`] at the lookahead, then applies its own policy
//! by moving the cursors with [`backtrack`], [`descend`], or [`restart`]. There are no failure
//! links: a dead candidate always resumes one character after its start.
//!
//! [`Trie`]: crate::Trie
//! [`step`]: Walker::step
//! [`backtrack`]: Walker::backtrack
//! [`descend`]: Walker::descend
//! [`restart`]: Walker::restart

use crate::{
    node::{NodeId, ROOT},
    Trie,
};
use core::ops::Range;

/// The outcome of looking up the lookahead character under the current parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Step {
    /// The parent has no child for the lookahead character.
    Dead,
    /// The child exists but no phrase ends there.
    Prefix(NodeId),
    /// The child exists and terminates a phrase spanning `left..=position`.
    Word(NodeId),
}

#[derive(Clone, Debug)]
pub(crate) struct Walker {
    pub(crate) left: usize,
    pub(crate) position: usize,
    parent: NodeId,
}

impl Walker {
    #[inline]
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            left: 0,
            position: 0,
            parent: ROOT,
        }
    }

    /// Classify the child of the current parent reached by `text[position]`.
    ///
    /// `position` must be in bounds.
    #[inline]
    pub(crate) fn step(&self, trie: &Trie, text: &[char]) -> Step {
        match trie.node(self.parent).child(text[self.position]) {
            None => Step::Dead,
            Some(child) if trie.node(child).is_end_of_word() => Step::Word(child),
            Some(child) => Step::Prefix(child),
        }
    }

    /// Whether the lookahead sits on the final character of a text of length `len`.
    #[inline]
    pub(crate) fn at_last(&self, len: usize) -> bool {
        self.position + 1 == len
    }

    /// The span of the candidate up to and including the lookahead.
    #[inline]
    pub(crate) fn span(&self) -> Range<usize> {
        self.left..self.position + 1
    }

    /// Abandon the current candidate and start a new one a single character later.
    #[inline]
    pub(crate) fn backtrack(&mut self) {
        self.parent = ROOT;
        self.left += 1;
        self.position = self.left;
    }

    /// Consume the lookahead, moving into `child`.
    #[inline]
    pub(crate) fn descend(&mut self, child: NodeId) {
        self.parent = child;
        self.position += 1;
    }

    /// Accept the candidate ending at the lookahead and start fresh just past it.
    #[inline]
    pub(crate) fn restart(&mut self) {
        self.parent = ROOT;
        self.left = self.position + 1;
        self.position = self.left;
    }
}
