use crate::commands::CmdResult;
use crate::error::Result;
use crate::form::FormState;
use crate::store::KeyValueStore;
use crate::todos::TodoModel;

/// Record the filter input and re-render the todos whose title matches it.
pub fn run<S: KeyValueStore>(
    model: &TodoModel<S>,
    form: &mut FormState,
    input: &str,
) -> Result<CmdResult> {
    form.filter = input.to_string();
    let matches = model.search_by_title(input);
    log::debug!("Filter '{}' matched {} todos", input, matches.len());
    Ok(CmdResult::default().with_listed_todos(matches))
}
