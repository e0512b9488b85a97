//! Implementors index for the documentation browser.
//!
//! Generated tables are registered one module at a time while the registry is
//! collecting. Calling [`ImplementorsRegistry::ready`] freezes the table into an
//! [`ImplementorsIndex`] and hands it to every subscriber, so readers never see
//! a partially registered index.

use std::{collections::BTreeMap, sync::Arc};

use anyhow::{Context, Result, bail};
use dioxus::logger::tracing::info;

type Subscriber = Box<dyn FnOnce(Arc<ImplementorsIndex>)>;

/// Frozen mapping from module name to its pre-rendered implementor fragments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImplementorsIndex {
    table: BTreeMap<String, Vec<String>>,
}

impl ImplementorsIndex {
    /// Fragments registered for `module`, empty when it has none.
    pub fn implementors(&self, module: &str) -> &[String] {
        self.table.get(module).map(Vec::as_slice).unwrap_or_default()
    }

    /// Module names in sorted order.
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[derive(Default)]
pub struct ImplementorsRegistry {
    table: BTreeMap<String, Vec<String>>,
    subscribers: Vec<Subscriber>,
    index: Option<Arc<ImplementorsIndex>>,
}

impl ImplementorsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        self.index.is_some()
    }

    /// Adds the fragments of one generated file. A module registered twice
    /// keeps the fragments of both calls, in order.
    pub fn register(&mut self, module: impl Into<String>, fragments: Vec<String>) -> Result<()> {
        let module = module.into();
        if self.is_ready() {
            bail!("cannot register implementors for {module}: index is already ready");
        }
        self.table.entry(module).or_default().extend(fragments);
        Ok(())
    }

    /// Registers every module of a generated JSON table of the form
    /// `{ "module": ["<fragment>", ...] }`.
    pub fn register_json(&mut self, json: &str) -> Result<()> {
        let table: BTreeMap<String, Vec<String>> =
            serde_json::from_str(json).context("parsing implementors table")?;
        for (module, fragments) in table {
            self.register(module, fragments)?;
        }
        Ok(())
    }

    /// Runs `f` with the frozen index: at [`ready`](Self::ready), or right away
    /// when the index is already frozen.
    pub fn subscribe(&mut self, f: impl FnOnce(Arc<ImplementorsIndex>) + 'static) {
        match &self.index {
            Some(index) => f(index.clone()),
            None => self.subscribers.push(Box::new(f)),
        }
    }

    pub fn ready(&mut self) -> Result<Arc<ImplementorsIndex>> {
        if self.is_ready() {
            bail!("implementors index is already ready");
        }
        let index = Arc::new(ImplementorsIndex {
            table: std::mem::take(&mut self.table),
        });
        self.index = Some(index.clone());
        info!("implementors index ready with {} modules", index.len());
        for subscriber in self.subscribers.drain(..) {
            subscriber(index.clone());
        }
        Ok(index)
    }
}
