use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TodoId;
use crate::store::KeyValueStore;
use crate::todos::TodoModel;

/// Remove a todo and re-render the full list.
pub fn run<S: KeyValueStore>(model: &mut TodoModel<S>, id: TodoId) -> Result<CmdResult> {
    let removed = model.get_by_id(id).cloned();
    model.delete(id)?;

    let mut result = CmdResult::default();
    match removed {
        Some(todo) => {
            result.add_message(CmdMessage::success(format!("Todo deleted: {}", todo.title)));
            result.affected_todos.push(todo);
        }
        None => result.add_message(CmdMessage::warning(format!("No todo with id {}", id))),
    }

    Ok(result.with_listed_todos(model.list().to_vec()))
}
