//! Node type for the [`Trie`]'s internal arena.
//!
//! Nodes are stored contiguously in the owning `Trie` and refer to each other by [`NodeId`]. Edges
//! between nodes are defined by characters (Unicode scalar values), and traversal through the
//! graph is done through those characters.
//!
//! Each node carries a set of [`Flags`], identifying whether it is the root and whether some
//! inserted phrase terminates at it.
//!
//! [`Trie`]: crate::Trie

use bitflags::bitflags;
use hashbrown::HashMap;

/// Index of a [`Node`] within its owning arena.
pub(crate) type NodeId = usize;

/// The root is always the first node allocated in an arena.
pub(crate) const ROOT: NodeId = 0;

bitflags! {
    /// Bitflags that define attributes on a [`Node`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub(crate) struct Flags: u8 {
        /// The node is the entry point of every traversal.
        ///
        /// Exactly one node per arena has this flag set.
        const ROOT = 0b0000_0001;
        /// Some inserted phrase terminates at this node.
        ///
        /// This flag is never set together with `ROOT`.
        const END_OF_WORD = 0b0000_0010;
    }
}

/// A single trie vertex.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    /// The character on the edge leading into this node. Unused for the root.
    pub(crate) codepoint: char,
    flags: Flags,
    /// Children keyed by character edges.
    children: HashMap<char, NodeId>,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self {
            codepoint: '\0',
            flags: Flags::ROOT,
            children: HashMap::new(),
        }
    }

    pub(crate) fn new(codepoint: char) -> Self {
        Self {
            codepoint,
            flags: Flags::empty(),
            children: HashMap::new(),
        }
    }

    #[inline]
    pub(crate) fn child(&self, c: char) -> Option<NodeId> {
        self.children.get(&c).copied()
    }

    pub(crate) fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.values().copied()
    }

    pub(crate) fn link(&mut self, c: char, child: NodeId) {
        self.children.insert(c, child);
    }

    #[inline]
    pub(crate) fn is_root(&self) -> bool {
        self.flags.contains(Flags::ROOT)
    }

    #[inline]
    pub(crate) fn is_end_of_word(&self) -> bool {
        self.flags.contains(Flags::END_OF_WORD)
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Marks the node as the terminus of a phrase. Has no effect on the root.
    pub(crate) fn mark_end_of_word(&mut self) {
        if !self.is_root() {
            self.flags.insert(Flags::END_OF_WORD);
        }
    }

    /// Clears the end-of-word flag without detaching the node or its descendants.
    pub(crate) fn soft_delete(&mut self) {
        self.flags.remove(Flags::END_OF_WORD);
    }
}
