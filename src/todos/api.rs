//! # API Facade
//!
//! [`TodoApp`] is the one object a display surface talks to. It is built once at
//! startup and owns everything mutable: the [`TodoModel`], the [`FormState`]
//! (including the active edit id), and the list currently on display.
//!
//! Each event method dispatches to the matching command and, when the command
//! asks for a re-render, swaps in the list it returned. Surfaces then read
//! [`TodoApp::visible`] or render the page; the facade itself never writes to a
//! terminal or a document.
//!
//! `TodoApp<S: KeyValueStore>` is generic over the storage backend:
//! - Native: `TodoApp<FileStore>`
//! - Browser: `TodoApp<LocalStore>`
//! - Testing: `TodoApp<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::form::{FormState, FormValues};
use crate::model::{Todo, TodoId};
use crate::render::{self, PageView};
use crate::store::KeyValueStore;
use crate::todos::TodoModel;

pub struct TodoApp<S: KeyValueStore> {
    model: TodoModel<S>,
    form: FormState,
    visible: Vec<Todo>,
}

impl<S: KeyValueStore> TodoApp<S> {
    /// Start with an empty form and the full list on display.
    pub fn new(model: TodoModel<S>) -> Self {
        let visible = model.list().to_vec();
        Self {
            model,
            form: FormState::new(),
            visible,
        }
    }

    pub fn submit(&mut self, values: FormValues) -> Result<commands::CmdResult> {
        let result = commands::submit::run(&mut self.model, &mut self.form, values)?;
        Ok(self.apply(result))
    }

    pub fn edit(&mut self, id: TodoId) -> Result<commands::CmdResult> {
        let result = commands::edit::run(&self.model, &mut self.form, id)?;
        Ok(self.apply(result))
    }

    pub fn done(&mut self, id: TodoId) -> Result<commands::CmdResult> {
        let result = commands::done::run(&mut self.model, id)?;
        Ok(self.apply(result))
    }

    pub fn delete(&mut self, id: TodoId) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.model, id)?;
        Ok(self.apply(result))
    }

    pub fn filter(&mut self, input: &str) -> Result<commands::CmdResult> {
        let result = commands::filter::run(&self.model, &mut self.form, input)?;
        Ok(self.apply(result))
    }

    pub fn reset(&mut self) -> commands::CmdResult {
        let result = commands::reset::run(&mut self.form);
        self.apply(result)
    }

    pub fn model(&self) -> &TodoModel<S> {
        &self.model
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// The list as last rendered.
    pub fn visible(&self) -> &[Todo] {
        &self.visible
    }

    pub fn page_view<'a>(&'a self, page_title: &'a str) -> PageView<'a> {
        PageView::new(page_title, &self.form, &self.visible)
    }

    pub fn render_list(&self) -> Result<String> {
        render::render_list(&self.visible)
    }

    pub fn render_page(&self, page_title: &str) -> Result<String> {
        render::render_page(&self.page_view(page_title))
    }

    fn apply(&mut self, mut result: commands::CmdResult) -> commands::CmdResult {
        if let Some(listed) = result.listed_todos.take() {
            self.visible = listed.clone();
            result.listed_todos = Some(listed);
        }
        result
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
