use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stagebill_core::{BillingError, BillingResult};

use crate::play::{Play, PlayId};

/// Lookup table of plays, immutable once loaded.
///
/// Backed by a `BTreeMap` so iteration order is deterministic regardless of
/// how the catalog was assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayCatalog {
    plays: BTreeMap<PlayId, Play>,
}

impl PlayCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a play under an id. Duplicate ids are a configuration error.
    pub fn insert(&mut self, id: impl Into<PlayId>, play: Play) -> BillingResult<()> {
        let id = id.into();
        if self.plays.contains_key(&id) {
            return Err(BillingError::validation(format!("duplicate play id: {id}")));
        }
        self.plays.insert(id, play);
        Ok(())
    }

    pub fn get(&self, id: &PlayId) -> Option<&Play> {
        self.plays.get(id)
    }

    /// Resolve a performance's play id.
    ///
    /// Absence is fatal to the statement being prepared, not a soft miss.
    pub fn resolve(&self, id: &PlayId) -> BillingResult<&Play> {
        self.get(id)
            .ok_or_else(|| BillingError::play_not_found(id.as_str()))
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn plays(&self) -> impl Iterator<Item = (&PlayId, &Play)> {
        self.plays.iter()
    }
}
