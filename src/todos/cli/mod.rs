//! Terminal output for the `todos` binary. Not part of the library API.

mod print;

pub use print::{print_field_errors, print_messages, print_todos};
