use crate::commands::CmdResult;
use crate::form::FormState;

/// Clear inputs, filter, edit mode and errors. The displayed list is left as is.
pub fn run(form: &mut FormState) -> CmdResult {
    form.clear();
    CmdResult::default()
}
