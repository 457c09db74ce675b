//! # Form State and Validation
//!
//! The form has two inputs (title and description), a filter input, and a single
//! nullable "editing" id. [`validate`] is the only gate on field lengths in the
//! crate: the model itself accepts anything.
//!
//! Validation failures are values, never errors. [`validate`] returns `None` when
//! both fields pass, otherwise the message for every failing field.

use crate::model::{TodoId, TodoPatch};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const TITLE_MAX_LEN: usize = 32;
pub const DESCRIPTION_MAX_LEN: usize = 100;

const REQUIRED_MESSAGE: &str = "Required";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Description,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
        }
    }

    pub fn max_len(&self) -> usize {
        match self {
            Field::Title => TITLE_MAX_LEN,
            Field::Description => DESCRIPTION_MAX_LEN,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error message per failing field. Serializes as `{"title": "...", ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: Field, message: String) {
        self.0.insert(field, message);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormValues {
    pub title: String,
    pub description: String,
}

impl FormValues {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
        }
    }

    pub fn to_patch(&self) -> TodoPatch {
        TodoPatch::new()
            .title(self.title.clone())
            .description(self.description.clone())
    }
}

/// Everything the form shows between events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub values: FormValues,
    pub errors: FieldErrors,
    pub editing: Option<TodoId>,
    pub filter: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Empty both inputs and the filter, leave edit mode, hide all errors.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Check both fields; `None` means the values can be submitted.
pub fn validate(values: &FormValues) -> Option<FieldErrors> {
    let mut errors = FieldErrors::default();

    for field in [Field::Title, Field::Description] {
        if let Some(message) = check_field(field, values.value(field)) {
            errors.insert(field, message);
        }
    }

    if errors.is_empty() {
        None
    } else {
        Some(errors)
    }
}

fn check_field(field: Field, value: &str) -> Option<String> {
    // UTF-16 code units, the unit browser inputs measure length in
    let len = value.encode_utf16().count();
    if len == 0 {
        Some(REQUIRED_MESSAGE.to_string())
    } else if len > field.max_len() {
        Some(format!("max length {}", field.max_len()))
    } else {
        None
    }
}
