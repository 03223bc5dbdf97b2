//! Detection, masking, and removal of banned phrases in text.
//!
//! Phrases are stored in a [`Trie`] and scanned for with four operations: [`filter`] removes
//! them, [`replace`] masks them, [`validate`] reports the first one found, and [`find_all`]
//! collects every distinct one. An [`Engine`] pairs a `Trie` with [`Options`] such as the noise
//! pattern stripped before validation. A [`Registry`] holds the active `Engine` and swaps in a
//! freshly built one when the word list changes, without disturbing readers of the old one.
//!
//! # Example
//! ```
//! use phrase_filter::Engine;
//!
//! let engine = Engine::from_words(["bad", "badword", "word"]);
//!
//! assert_eq!(engine.replace("this is badword"), "this is *******");
//! assert_eq!(engine.find_in("b|a|d"), (true, "bad".to_owned()));
//! assert_eq!(engine.find_all("badword"), vec!["bad", "badword", "word"]);
//! ```
//!
//! [`filter`]: Trie::filter
//! [`replace`]: Trie::replace
//! [`validate`]: Trie::validate
//! [`find_all`]: Trie::find_all

mod builder;
mod engine;
mod error;
mod node;
mod options;
mod trie;
mod walker;

pub mod registry;

pub use builder::EngineBuilder;
pub use engine::Engine;
pub use error::{Error, Result};
pub use options::{CensorMode, NoisePattern, Options, DEFAULT_NOISE_PATTERN};
pub use registry::Registry;
pub use trie::Trie;
