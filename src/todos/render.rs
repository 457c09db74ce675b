//! # List Renderer
//!
//! Rendering happens in two steps. [`list_view`] is a pure function from todos to
//! a display tree ([`ListView`]); the HTML functions then feed that tree (plus the
//! form state, for the full page) to minijinja templates.
//!
//! Templates live as stand-alone files under `templates/` and are compiled into
//! the binary. Their names end in `.html`, so minijinja auto-escapes every value:
//! titles and descriptions are shown as text, never interpreted as markup.
//!
//! Every call rebuilds the whole output; nothing is diffed against a previous
//! render.

use crate::error::Result;
use crate::form::{FieldErrors, FormState, FormValues};
use crate::model::Todo;
use minijinja::{context, Environment};
use once_cell::sync::Lazy;
use serde::Serialize;

pub const LIST_TEMPLATE: &str = include_str!("templates/list.html");
pub const PAGE_TEMPLATE: &str = include_str!("templates/page.html");

pub const EMPTY_PLACEHOLDER: &str = "No tasks yet";
pub const DEFAULT_PAGE_TITLE: &str = "Todo list";

// Both templates are compiled into the binary, so a syntax error here is a build
// defect caught by every render test, not a runtime condition.
static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_template("list.html", LIST_TEMPLATE)
        .expect("list template is valid");
    env.add_template("page.html", PAGE_TEMPLATE)
        .expect("page template is valid");
    env
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Done,
    Edit,
    Delete,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Done => "Done",
            Action::Edit => "Edit",
            Action::Delete => "Delete",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Action::Done => "submit-btn",
            Action::Edit => "edit-btn",
            Action::Delete => "delete-btn",
        }
    }
}

/// An action button as the templates see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionButton {
    pub name: Action,
    pub label: &'static str,
    pub class: &'static str,
}

impl From<Action> for ActionButton {
    fn from(action: Action) -> Self {
        Self {
            name: action,
            label: action.label(),
            class: action.css_class(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoItemView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub actions: Vec<ActionButton>,
}

impl TodoItemView {
    pub fn has_action(&self, action: Action) -> bool {
        self.actions.iter().any(|button| button.name == action)
    }
}

/// The display tree for a list of todos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ListView {
    Empty { placeholder: &'static str },
    Items { items: Vec<TodoItemView> },
}

/// Everything the full page shows.
#[derive(Debug, Clone, Serialize)]
pub struct PageView<'a> {
    pub page_title: &'a str,
    pub form: &'a FormValues,
    pub errors: &'a FieldErrors,
    pub editing: Option<String>,
    pub filter: &'a str,
    pub list: ListView,
}

impl<'a> PageView<'a> {
    pub fn new(page_title: &'a str, state: &'a FormState, todos: &[Todo]) -> Self {
        Self {
            page_title,
            form: &state.values,
            errors: &state.errors,
            editing: state.editing.map(|id| id.to_string()),
            filter: &state.filter,
            list: list_view(todos),
        }
    }
}

pub fn list_view(todos: &[Todo]) -> ListView {
    if todos.is_empty() {
        return ListView::Empty {
            placeholder: EMPTY_PLACEHOLDER,
        };
    }

    let items = todos
        .iter()
        .map(|todo| {
            let completed = todo.is_completed();
            let mut actions = Vec::with_capacity(3);
            if !completed {
                actions.push(Action::Done.into());
                actions.push(Action::Edit.into());
            }
            actions.push(Action::Delete.into());

            TodoItemView {
                id: todo.id.to_string(),
                title: todo.title.clone(),
                description: todo.description.clone(),
                completed,
                actions,
            }
        })
        .collect();

    ListView::Items { items }
}

/// HTML fragment for the list container.
pub fn render_list(todos: &[Todo]) -> Result<String> {
    let template = TEMPLATES.get_template("list.html")?;
    Ok(template.render(context! { list => list_view(todos) })?)
}

/// The whole HTML document: form, filter input and list.
pub fn render_page(page: &PageView<'_>) -> Result<String> {
    let template = TEMPLATES.get_template("page.html")?;
    Ok(template.render(page)?)
}
