use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodoError};
use crate::form::{FormState, FormValues};
use crate::model::TodoId;
use crate::store::KeyValueStore;
use crate::todos::TodoModel;

/// Load a todo into the form and enter edit mode. The list is not re-rendered.
pub fn run<S: KeyValueStore>(
    model: &TodoModel<S>,
    form: &mut FormState,
    id: TodoId,
) -> Result<CmdResult> {
    let todo = model.get_by_id(id).ok_or(TodoError::TodoNotFound(id))?;

    form.editing = Some(id);
    form.values = FormValues::new(todo.title.clone(), todo.description.clone());

    let mut result = CmdResult::default().with_affected_todos(vec![todo.clone()]);
    result.add_message(CmdMessage::info(format!("Editing: {}", todo.title)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Field;
    use crate::model::TodoPatch;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn loads_todo_into_form() {
        let mut model = TodoModel::load(InMemoryStore::new()).unwrap();
        let id = model
            .create(TodoPatch::new().title("Title").description("Desc"))
            .unwrap();
        let mut form = FormState::new();

        let result = run(&model, &mut form, id).unwrap();

        assert_eq!(form.editing, Some(id));
        assert_eq!(form.values, FormValues::new("Title", "Desc"));
        assert!(result.listed_todos.is_none());
    }

    #[test]
    fn keeps_existing_errors_and_filter() {
        let mut model = TodoModel::load(InMemoryStore::new()).unwrap();
        let id = model
            .create(TodoPatch::new().title("Title").description("Desc"))
            .unwrap();
        let mut form = FormState::new();
        crate::commands::submit::run(&mut model, &mut form, FormValues::default()).unwrap();
        form.filter = "ti".to_string();

        run(&model, &mut form, id).unwrap();

        assert!(form.errors.contains(Field::Title));
        assert_eq!(form.filter, "ti");
    }

    #[test]
    fn unknown_id_is_an_error_and_leaves_form_alone() {
        let model = TodoModel::load(InMemoryStore::new()).unwrap();
        let mut form = FormState::new();
        form.values = FormValues::new("typed", "text");

        let result = run(&model, &mut form, TodoId::from_f64(0.5));

        assert!(matches!(result, Err(TodoError::TodoNotFound(_))));
        assert_eq!(form.values, FormValues::new("typed", "text"));
        assert_eq!(form.editing, None);
    }
}
