mod certificates;
mod experience;
mod projects;
mod skills;

pub use certificates::CertificateAdmin;
pub use experience::ExperienceAdmin;
pub use projects::ProjectAdmin;
pub use skills::SkillAdmin;

use crate::modules::admin::adapter::incoming::web::form::{pending_key, FormFields, ListAction};
use crate::modules::admin::adapter::incoming::web::resource::DraftError;
use crate::shared::list_editor::{DuplicatePolicy, ListEditor};

/// Apply one list button to a string list, taking new text from the
/// list's "add" box.
fn edit_strings(
    items: &mut Vec<String>,
    policy: DuplicatePolicy,
    action: &ListAction,
    form: &FormFields,
) -> Result<(), DraftError> {
    ListEditor::new(items, policy).apply(action.op, || form.text(&pending_key(&action.field)))?;
    Ok(())
}
