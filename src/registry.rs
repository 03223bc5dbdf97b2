//! Hot-swappable holder of the active [`Engine`].
//!
//! A [`Registry`] is either uninitialized or holds one active `Engine`. Readers [`get`] an
//! `Arc<Engine>` snapshot and scan against it for as long as they like. Writers never touch a
//! published engine: [`update`] builds a complete replacement from a fresh word list and then
//! publishes it with a single atomic swap, so a reader sees either the old engine or the new one,
//! never anything in between. Old snapshots are dropped once their last reader lets go.
//!
//! A process-wide registry is available through the free functions [`init`], [`get`][get()],
//! [`update`][update()], and [`release`].
//!
//! [`get`]: Registry::get
//! [`update`]: Registry::update

use crate::{Engine, Options};
use arc_swap::ArcSwapOption;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Default)]
pub struct Registry {
    active: ArcSwapOption<Engine>,
}

impl Registry {
    /// Creates an uninitialized `Registry`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: ArcSwapOption::empty(),
        }
    }

    /// Builds an `Engine` with default options from `loader`'s words and makes it active.
    ///
    /// Any engine that was already active is replaced.
    pub fn init<F, I>(&self, loader: F)
    where
        F: FnOnce() -> I,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.init_with_options(Options::default(), loader);
    }

    pub fn init_with_options<F, I>(&self, options: Options, loader: F)
    where
        F: FnOnce() -> I,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let engine = Engine::from_words_with_options(loader(), options);
        debug!(
            words = engine.words().len(),
            nodes = engine.trie().node_count(),
            "initialized registry"
        );
        self.active.store(Some(Arc::new(engine)));
    }

    /// Returns the active engine, or `None` if uninitialized.
    #[must_use]
    pub fn get(&self) -> Option<Arc<Engine>> {
        self.active.load_full()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load().is_some()
    }

    /// Builds a new `Engine` from `loader`'s words and publishes it in place of the active one.
    ///
    /// The new engine inherits the active engine's [`Options`]; its phrases come only from
    /// `loader`. Readers holding the previous engine keep using it unchanged.
    ///
    /// Does nothing, without calling `loader`, if the registry is uninitialized. Returns whether a
    /// new engine was published.
    pub fn update<F, I>(&self, loader: F) -> bool
    where
        F: FnOnce() -> I,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let Some(current) = self.active.load_full() else {
            debug!("skipped update of uninitialized registry");
            return false;
        };
        let engine = Arc::new(Engine::from_words_with_options(
            loader(),
            current.options().clone(),
        ));
        drop(current);

        let mut published = false;
        // A concurrent `release` wins: an empty registry stays empty.
        self.active.rcu(|active| {
            published = active.is_some();
            active.as_ref().map(|_| Arc::clone(&engine))
        });
        if published {
            debug!(
                words = engine.words().len(),
                nodes = engine.trie().node_count(),
                "published updated engine"
            );
        } else {
            debug!("registry released during update; discarded new engine");
        }
        published
    }

    /// Clears the active engine. Outstanding snapshots stay valid.
    pub fn release(&self) {
        self.active.store(None);
        debug!("released registry");
    }
}

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

/// The process-wide registry behind [`init`], [`get`], [`update`], and [`release`].
#[must_use]
pub fn global() -> &'static Registry {
    &GLOBAL
}

/// Initializes the process-wide registry. See [`Registry::init`].
///
/// Must happen before other threads rely on [`get`] returning an engine.
pub fn init<F, I>(loader: F)
where
    F: FnOnce() -> I,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    GLOBAL.init(loader);
}

/// Returns the process-wide active engine. See [`Registry::get`].
#[must_use]
pub fn get() -> Option<Arc<Engine>> {
    GLOBAL.get()
}

/// Swaps in a new process-wide engine. See [`Registry::update`].
pub fn update<F, I>(loader: F) -> bool
where
    F: FnOnce() -> I,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    GLOBAL.update(loader)
}

/// Clears the process-wide registry. See [`Registry::release`].
pub fn release() {
    GLOBAL.release();
}
