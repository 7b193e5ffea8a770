//! The item registry and the lookup seam containers resolve definitions through.

use std::{fs, io, path::Path};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::{ItemDefinition, ItemId, RegistryExt, UNKNOWN_ITEM};

/// Resolves item identities to their static definitions.
///
/// Lookups are total: identities without a definition resolve to [`UNKNOWN_ITEM`].
pub trait ItemLookup: Send + Sync {
    /// Returns the definition for `id`.
    fn lookup(&self, id: ItemId) -> &ItemDefinition;
}

/// Errors raised while building an [`ItemRegistry`].
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The definitions file could not be read.
    #[error("failed to read item definitions: {0}")]
    Io(#[from] io::Error),
    /// The definitions file is not valid JSON.
    #[error("failed to parse item definitions: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two definitions share an identity.
    #[error("item {0} is defined more than once")]
    DuplicateId(ItemId),
    /// A weight is negative or not finite.
    #[error("item {id} has an invalid weight {weight}")]
    InvalidWeight {
        /// The offending identity.
        id: ItemId,
        /// The rejected weight.
        weight: f64,
    },
    /// A noted/unnoted link does not point back at its source.
    #[error("item {id} has an inconsistent note link: {reason}")]
    InconsistentNote {
        /// The offending identity.
        id: ItemId,
        /// What is wrong with the link.
        reason: &'static str,
    },
    /// The registry no longer accepts definitions.
    #[error("cannot register item {0} after the registry is frozen")]
    Frozen(ItemId),
}

#[derive(Deserialize)]
struct RawEntry {
    id: ItemId,
    #[serde(flatten)]
    definition: ItemDefinition,
}

/// Registry of item definitions keyed by identity.
pub struct ItemRegistry {
    by_id: FxHashMap<ItemId, ItemDefinition>,
    allows_registering: bool,
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemRegistry {
    /// Creates an empty registry that accepts new definitions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_id: FxHashMap::default(),
            allows_registering: true,
        }
    }

    /// Parses a JSON array of definitions, validates it and freezes the result.
    ///
    /// Each entry is a definition object with an additional `id` field.
    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        let entries: Vec<RawEntry> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for entry in entries {
            registry.register(entry.id, entry.definition)?;
        }
        registry.validate()?;
        registry.freeze();
        log::debug!("Loaded {} item definitions", registry.len());
        Ok(registry)
    }

    /// Reads and parses the definitions file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Registers a definition under `id`.
    pub fn register(&mut self, id: ItemId, definition: ItemDefinition) -> Result<(), RegistryError> {
        if !self.allows_registering {
            return Err(RegistryError::Frozen(id));
        }
        if !definition.weight.is_finite() || definition.weight < 0.0 {
            return Err(RegistryError::InvalidWeight {
                id,
                weight: definition.weight,
            });
        }
        if self.by_id.contains_key(&id) {
            return Err(RegistryError::DuplicateId(id));
        }
        self.by_id.insert(id, definition);
        Ok(())
    }

    /// Checks that every note link points at a definition that links back, and
    /// that no definition is both a note and the source of one.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for (&id, definition) in &self.by_id {
            if definition.noted_id.is_some() && definition.unnoted_id.is_some() {
                return Err(RegistryError::InconsistentNote {
                    id,
                    reason: "links to both a noted and an unnoted form",
                });
            }
            if let Some(noted) = definition.noted_id {
                if !definition.noteable {
                    return Err(RegistryError::InconsistentNote {
                        id,
                        reason: "noted id set on a non-noteable item",
                    });
                }
                if self.get(noted).and_then(|d| d.unnoted_id) != Some(id) {
                    return Err(RegistryError::InconsistentNote {
                        id,
                        reason: "noted form does not link back",
                    });
                }
            }
            if let Some(unnoted) = definition.unnoted_id
                && self.get(unnoted).and_then(|d| d.noted_id) != Some(id)
            {
                return Err(RegistryError::InconsistentNote {
                    id,
                    reason: "unnoted form does not link back",
                });
            }
        }
        Ok(())
    }

    /// Returns the definition registered under `id`, if any.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.by_id.get(&id)
    }

    /// Returns the number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl ItemLookup for ItemRegistry {
    fn lookup(&self, id: ItemId) -> &ItemDefinition {
        self.get(id).unwrap_or(&UNKNOWN_ITEM)
    }
}

impl RegistryExt for ItemRegistry {
    fn freeze(&mut self) {
        self.allows_registering = false;
    }
}
