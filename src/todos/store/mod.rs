//! # Storage Layer
//!
//! The todo list is persisted as a single string value under a single key. The
//! [`KeyValueStore`] trait is that slot: an opaque get/set of strings by key.
//! What the string contains (a JSON array of todos) is the model's business, not
//! the store's.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: native storage, one `<key>.json` file per key inside a
//!   data directory.
//! - [`memory::InMemoryStore`]: in-memory storage for testing. No persistence.
//! - `web::LocalStore` (wasm32 only): the browser's `window.localStorage`.
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── todo-list.json      # JSON array of todos
//! └── config.json         # TodoConfig
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

/// Abstract interface for the persisted key-value slot.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` when nothing was stored yet.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
