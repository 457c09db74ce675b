use crate::error::TodoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a todo: a random number in `[0, 1)`, stored as a JSON number.
///
/// Ids are not checked for collisions; two todos drawing the same number is
/// possible but vanishingly unlikely.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(f64);

impl TodoId {
    pub fn random() -> Self {
        Self(rand::random::<f64>())
    }

    pub fn from_f64(value: f64) -> Self {
        Self(value)
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self(value)),
            _ => Err(TodoError::InvalidId(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    // Absent until the todo is marked done
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl Todo {
    /// Builds a todo from a fresh id and whatever fields the patch carries.
    pub fn new(id: TodoId, fields: TodoPatch) -> Self {
        let mut todo = Self {
            id,
            title: String::new(),
            description: String::new(),
            completed: None,
        };
        todo.merge(fields);
        todo
    }

    pub fn is_completed(&self) -> bool {
        self.completed.unwrap_or(false)
    }

    /// Shallow merge: fields present in the patch overwrite, the rest are kept.
    pub fn merge(&mut self, patch: TodoPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(completed) = patch.completed {
            self.completed = Some(completed);
        }
    }
}

/// A partial set of todo fields. The id is never part of a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}
