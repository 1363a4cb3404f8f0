//! Named-move registry.
//!
//! Distinct from [`crate::config::MoveConfig`], which is the TOML-shaped
//! data: this is the runtime lookup structure built from it.

use heapless::{FnvIndexMap, String};

use crate::config::{MoveConfig, SystemConfig};
use crate::error::{Error, MoveError, Result};

/// Maximum number of named moves held by a registry.
pub const MAX_MOVES: usize = 64;

/// Registry for named moves, keyed by name.
#[derive(Debug, Default)]
pub struct MoveRegistry {
    moves: FnvIndexMap<String<32>, MoveConfig, MAX_MOVES>,
}

impl MoveRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            moves: FnvIndexMap::new(),
        }
    }

    /// Build a registry from a [`SystemConfig`]'s named moves.
    pub fn from_config(config: &SystemConfig) -> Self {
        let mut registry = Self::new();
        for (name, mv) in config.moves.iter() {
            let _ = registry.register(name.as_str(), mv.clone());
        }
        registry
    }

    /// Register a move under `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` doesn't fit a 32-byte buffer or the
    /// registry is full.
    pub fn register(&mut self, name: &str, mv: MoveConfig) -> Result<()> {
        let name_str = String::try_from(name).map_err(|_| {
            Error::Move(MoveError::InvalidName(
                heapless::String::try_from("name too long").unwrap_or_default(),
            ))
        })?;

        self.moves.insert(name_str, mv).map_err(|_| {
            Error::Move(MoveError::InvalidName(
                heapless::String::try_from("registry full").unwrap_or_default(),
            ))
        })?;

        Ok(())
    }

    /// Look up a move by name.
    pub fn get(&self, name: &str) -> Option<&MoveConfig> {
        let name_str = String::try_from(name).ok()?;
        self.moves.get(&name_str)
    }

    /// `true` iff a move with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        String::try_from(name)
            .map(|n| self.moves.contains_key(&n))
            .unwrap_or(false)
    }

    /// Number of registered moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// `true` iff the registry holds no moves.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Iterate over registered move names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.moves.keys().map(|s| s.as_str())
    }
}
