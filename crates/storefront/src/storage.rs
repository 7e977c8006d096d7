//! Cart persistence: a single JSON document on disk.
//!
//! Plays the role of the original widget's one local-storage key: the full
//! cart is serialized on every mutation and reloaded at startup. Load
//! failures never fail startup; the cart defaults to empty.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use blueshop_core::Cart;
use thiserror::Error;

/// Errors persisting cart state to disk.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem write failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Cart serialization failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// File-backed cart persistence.
#[derive(Debug, Clone)]
pub struct CartStorage {
    path: PathBuf,
}

impl CartStorage {
    /// Create storage rooted at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The storage file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted cart.
    ///
    /// A missing file is the normal first-run state and loads silently as an
    /// empty cart. Unreadable or unparseable state is discarded with a
    /// warning; startup never fails on cart state.
    #[must_use]
    pub fn load(&self) -> Cart {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Cart::new(),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "Failed to read cart state: {e}"
                );
                return Cart::new();
            }
        };

        serde_json::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(
                path = %self.path.display(),
                "Discarding unparseable cart state: {e}"
            );
            Cart::new()
        })
    }

    /// Persist the full cart.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the filesystem write fails.
    pub fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let json = serde_json::to_string(cart)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
