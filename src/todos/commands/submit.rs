use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::{validate, FormState, FormValues};
use crate::store::KeyValueStore;
use crate::todos::TodoModel;

/// Submit the form: create a todo, or update the one being edited.
///
/// Invalid values leave the model alone; the form keeps what was typed and shows
/// the current errors.
pub fn run<S: KeyValueStore>(
    model: &mut TodoModel<S>,
    form: &mut FormState,
    values: FormValues,
) -> Result<CmdResult> {
    if let Some(errors) = validate(&values) {
        log::debug!("Rejected form submission: {:?}", errors);
        form.values = values;
        form.errors = errors.clone();
        return Ok(CmdResult::default().with_errors(errors));
    }

    let mut result = CmdResult::default();
    let id = match form.editing {
        Some(id) => {
            model.update(id, values.to_patch())?;
            result.add_message(CmdMessage::success(format!("Todo updated: {}", values.title)));
            id
        }
        None => {
            let id = model.create(values.to_patch())?;
            result.add_message(CmdMessage::success(format!("Todo created: {}", values.title)));
            id
        }
    };

    form.clear();

    let affected = model.get_by_id(id).cloned().into_iter().collect();
    Ok(result
        .with_affected_todos(affected)
        .with_listed_todos(model.list().to_vec()))
}
