//! # Todos Architecture
//!
//! Todos is a small todo-list application: a form bound to a persisted list,
//! rendered as HTML. Like any UI-agnostic core, it is a library first. The same
//! code backs a browser page (wasm32, `localStorage`) and the `todos` binary
//! (a data directory on disk).
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Display surface (browser page, or cli/ + main.rs)          │
//! │  - Turns user input into events, shows rendered output      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - TodoApp: owns model, form state, displayed list          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + form.rs + render.rs        │
//! │  - submit / edit / done / delete / filter / reset           │
//! │  - validation, display tree, HTML templates                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (todos.rs) over Storage (store/)                     │
//! │  - TodoModel: CRUD + search, persists on every mutation     │
//! │  - KeyValueStore: FileStore, InMemoryStore, LocalStore      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never prints, never exits, and never assumes a
//! terminal or a DOM. Everything runs synchronously to completion on the event
//! that triggered it.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all events
//! - [`commands`]: One module per event
//! - [`form`]: Form state and validation
//! - [`render`]: Display tree and HTML rendering
//! - [`todos`]: The persisted todo list
//! - [`store`]: Key-value storage abstraction and implementations
//! - [`model`]: Core data types (`Todo`, `TodoId`, `TodoPatch`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod render;
pub mod store;
pub mod todos;
