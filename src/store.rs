//! Selection persistence boundary
//!
//! The core never decides where selections live. Hosts hand it a
//! [`SelectionStore`], and the crate ships three: an in-memory map, a JSON
//! document on disk, and a [`StoreStack`] that layers stores so a failing or
//! missing backend falls through to the next one.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;

use crate::error::SizhuResult;
use crate::pillars::FourPillars;

/// Key namespace shared by every store backend
pub const STORAGE_KEY_PREFIX: &str = "fourPillars_";

/// Storage key for a selector id
pub fn storage_key(selector_id: &str) -> String {
    format!("{STORAGE_KEY_PREFIX}{selector_id}")
}

/// A key-value backend holding four-pillar selections
pub trait SelectionStore {
    fn load(&self, key: &str) -> SizhuResult<Option<FourPillars>>;
    fn save(&mut self, key: &str, pillars: &FourPillars) -> SizhuResult<()>;
    fn remove(&mut self, key: &str) -> SizhuResult<()>;
}

/// In-memory fallback store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, FourPillars>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl SelectionStore for MemoryStore {
    fn load(&self, key: &str) -> SizhuResult<Option<FourPillars>> {
        Ok(self.entries.get(key).copied())
    }

    fn save(&mut self, key: &str, pillars: &FourPillars) -> SizhuResult<()> {
        self.entries.insert(key.to_string(), *pillars);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> SizhuResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Local key-value cache backed by a single JSON document
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_entries(&self) -> SizhuResult<BTreeMap<String, FourPillars>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_entries(&self, entries: &BTreeMap<String, FourPillars>) -> SizhuResult<()> {
        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl SelectionStore for JsonFileStore {
    fn load(&self, key: &str) -> SizhuResult<Option<FourPillars>> {
        Ok(self.read_entries()?.get(key).copied())
    }

    fn save(&mut self, key: &str, pillars: &FourPillars) -> SizhuResult<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), *pillars);
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> SizhuResult<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

/// Layered stores: save writes every layer, load takes the first hit.
///
/// Layers are consulted in push order, so put the preferred backend first
/// and the in-memory fallback last.
#[derive(Default)]
pub struct StoreStack {
    layers: Vec<Box<dyn SelectionStore>>,
}

impl StoreStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, store: Box<dyn SelectionStore>) {
        self.layers.push(store);
    }

    pub fn with_layer(mut self, store: Box<dyn SelectionStore>) -> Self {
        self.push(store);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl SelectionStore for StoreStack {
    fn load(&self, key: &str) -> SizhuResult<Option<FourPillars>> {
        for layer in &self.layers {
            if let Some(pillars) = layer.load(key)? {
                return Ok(Some(pillars));
            }
        }
        Ok(None)
    }

    /// Writes every layer; succeeds when at least one layer took the value.
    fn save(&mut self, key: &str, pillars: &FourPillars) -> SizhuResult<()> {
        let mut saved = self.layers.is_empty();
        let mut last_err = None;
        for layer in &mut self.layers {
            match layer.save(key, pillars) {
                Ok(()) => saved = true,
                Err(err) => last_err = Some(err),
            }
        }
        match (saved, last_err) {
            (false, Some(err)) => Err(err),
            _ => Ok(()),
        }
    }

    fn remove(&mut self, key: &str) -> SizhuResult<()> {
        for layer in &mut self.layers {
            layer.remove(key)?;
        }
        Ok(())
    }
}
