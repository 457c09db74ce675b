//! # Todo Model
//!
//! [`TodoModel`] owns the in-memory list and mirrors it into a [`KeyValueStore`]
//! under a single key. Every mutation re-serializes the whole list; there is no
//! diffing, batching or partial write.
//!
//! The model does not validate titles or descriptions. Length limits live at the
//! form boundary (see [`crate::form`]); direct calls here bypass them.

use crate::error::Result;
use crate::model::{Todo, TodoId, TodoPatch};
use crate::store::KeyValueStore;

/// Storage key the list is persisted under unless configured otherwise.
pub const TODO_LIST_KEY: &str = "todo-list";

pub struct TodoModel<S: KeyValueStore> {
    store: S,
    key: String,
    list: Vec<Todo>,
}

impl<S: KeyValueStore> TodoModel<S> {
    /// Load the list stored under [`TODO_LIST_KEY`], starting empty when nothing
    /// is stored.
    pub fn load(store: S) -> Result<Self> {
        Self::load_with(store, TODO_LIST_KEY, Vec::new())
    }

    /// Load the list stored under `key`, falling back to `initial` when the slot
    /// is empty or holds `null`. A value that is not a JSON list of todos is an
    /// error. The resulting list is written back to the store immediately.
    pub fn load_with(store: S, key: impl Into<String>, initial: Vec<Todo>) -> Result<Self> {
        let key = key.into();
        let stored = match store.get(&key)? {
            Some(raw) => serde_json::from_str::<Option<Vec<Todo>>>(&raw)?,
            None => None,
        };

        let list = match stored {
            Some(list) => {
                log::debug!("Loaded {} todos from '{}'", list.len(), key);
                list
            }
            None => {
                log::debug!("Nothing stored under '{}', using initial list", key);
                initial
            }
        };

        let mut model = Self { store, key, list };
        model.persist()?;
        Ok(model)
    }

    pub fn list(&self) -> &[Todo] {
        &self.list
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn get_by_id(&self, id: TodoId) -> Option<&Todo> {
        self.list.iter().find(|todo| todo.id == id)
    }

    /// Append a todo with a fresh random id and the given fields.
    pub fn create(&mut self, fields: TodoPatch) -> Result<TodoId> {
        let todo = Todo::new(TodoId::random(), fields);
        let id = todo.id;
        log::info!("Created todo {}: {}", id, todo.title);
        self.list.push(todo);
        self.persist()?;
        Ok(id)
    }

    /// Merge `fields` into the todo with `id`. Unknown ids change nothing, but the
    /// list is still written back.
    pub fn update(&mut self, id: TodoId, fields: TodoPatch) -> Result<()> {
        match self.list.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => todo.merge(fields),
            None => log::debug!("Update skipped, no todo with id {}", id),
        }
        self.persist()
    }

    pub fn delete(&mut self, id: TodoId) -> Result<()> {
        let before = self.list.len();
        self.list.retain(|todo| todo.id != id);
        if self.list.len() < before {
            log::info!("Deleted todo {}", id);
        }
        self.persist()
    }

    /// Case-insensitive substring match on titles, in list order.
    pub fn search_by_title(&self, term: &str) -> Vec<Todo> {
        let term_lower = term.to_lowercase();
        self.list
            .iter()
            .filter(|todo| todo.title.to_lowercase().contains(&term_lower))
            .cloned()
            .collect()
    }

    fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.list)?;
        self.store.set(&self.key, &json)?;
        log::debug!("Persisted {} todos to '{}'", self.list.len(), self.key);
        Ok(())
    }
}
