//! # Commands
//!
//! One module per user event. Each command takes the model and/or the form state,
//! does the work, and returns a [`CmdResult`] describing what happened: which
//! todos were touched, which list (if any) the display should re-render, and any
//! validation errors or messages for the user.
//!
//! Commands never render and never touch a terminal or a DOM.

use crate::form::FieldErrors;
use crate::model::Todo;

pub mod delete;
pub mod done;
pub mod edit;
pub mod filter;
pub mod reset;
pub mod submit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_todos: Vec<Todo>,
    /// The list to display next; `None` leaves the current display alone.
    pub listed_todos: Option<Vec<Todo>>,
    pub errors: Option<FieldErrors>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_todos(mut self, todos: Vec<Todo>) -> Self {
        self.affected_todos = todos;
        self
    }

    pub fn with_listed_todos(mut self, todos: Vec<Todo>) -> Self {
        self.listed_todos = Some(todos);
        self
    }

    pub fn with_errors(mut self, errors: FieldErrors) -> Self {
        self.errors = Some(errors);
        self
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_none()
    }
}
