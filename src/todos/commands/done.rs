use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{TodoId, TodoPatch};
use crate::store::KeyValueStore;
use crate::todos::TodoModel;

/// Mark a todo completed and re-render the full list.
pub fn run<S: KeyValueStore>(model: &mut TodoModel<S>, id: TodoId) -> Result<CmdResult> {
    model.update(id, TodoPatch::new().completed(true))?;

    let mut result = CmdResult::default();
    match model.get_by_id(id) {
        Some(todo) => {
            result.add_message(CmdMessage::success(format!("Todo done: {}", todo.title)));
            result.affected_todos.push(todo.clone());
        }
        None => result.add_message(CmdMessage::warning(format!("No todo with id {}", id))),
    }

    Ok(result.with_listed_todos(model.list().to_vec()))
}
