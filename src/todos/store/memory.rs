use super::KeyValueStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls seen so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::model::{Todo, TodoId, TodoPatch};
    use crate::todos::TODO_LIST_KEY;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        todos: Vec<Todo>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                todos: Vec::new(),
            }
        }

        pub fn with_todos(mut self, count: usize) -> Self {
            for i in 0..count {
                let title = format!("Test Todo {}", i + 1);
                let description = format!("Description for todo {}", i + 1);
                self = self.with_todo(&title, &description);
            }
            self
        }

        pub fn with_todo(mut self, title: &str, description: &str) -> Self {
            self.todos.push(Todo::new(
                TodoId::random(),
                TodoPatch::new().title(title).description(description),
            ));
            self.persist()
        }

        pub fn with_completed_todo(mut self, title: &str) -> Self {
            self.todos.push(Todo::new(
                TodoId::random(),
                TodoPatch::new()
                    .title(title)
                    .description("Completed description")
                    .completed(true),
            ));
            self.persist()
        }

        pub fn todos(&self) -> &[Todo] {
            &self.todos
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }

        fn persist(mut self) -> Self {
            let json = serde_json::to_string(&self.todos).unwrap();
            self.store.set(TODO_LIST_KEY, &json).unwrap();
            self
        }
    }
}
