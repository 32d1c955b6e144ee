use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::admin::adapter::incoming::web::form::{pending_key, FormFields, ListAction};
use crate::modules::admin::adapter::incoming::web::render::{
    checkbox_field, list_item_controls, number_field, text_field, textarea_field,
};
use crate::modules::admin::adapter::incoming::web::resource::{
    AdminResource, DraftError, ListRow, SubmitError,
};
use crate::modules::skill::application::domain::entities::DEFAULT_SKILL_ICON;
use crate::modules::skill::application::domain::{
    SkillCategory, SkillCategoryInput, SkillCategoryPatch, SkillEntry,
};
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillCategoryError, DeleteSkillCategoryError, GetSkillCategoryError,
    UpdateSkillCategoryError,
};
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::shared::html::escape;
use crate::shared::list_editor::{DuplicatePolicy, ListEditor, ListItem, ListOp};
use crate::shared::listing::ListScope;
use crate::shared::validation::ValidationError;
use crate::AppState;

/// Level preset in the "add skill" box.
const NEW_SKILL_LEVEL: i32 = 80;

const NAME_FIELD: &str = "skills.name";
const LEVEL_FIELD: &str = "skills.level";

impl ListItem for SkillEntry {
    fn key(&self) -> &str {
        &self.name
    }

    fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            level: self.level,
        }
    }
}

/// The entry typed into the "add skill" boxes.
fn pending_entry(form: &FormFields) -> Result<SkillEntry, ValidationError> {
    let prefix = pending_key("skills");
    let level = match form.optional(&format!("{}_level", prefix)) {
        None => NEW_SKILL_LEVEL,
        Some(raw) => raw.parse().map_err(|_| ValidationError::Invalid {
            field: "skills.level",
            message: format!("\"{}\" is not a whole number", raw),
        })?,
    };

    Ok(SkillEntry {
        name: form.text(&format!("{}_name", prefix)),
        level,
    })
}

fn skill_rows(skills: &[SkillEntry], form: &FormFields) -> String {
    let rows: String = skills
        .iter()
        .enumerate()
        .map(|(i, skill)| {
            format!(
                "<li><input type=\"hidden\" name=\"{nf}\" value=\"{n}\">{n} \
                 <input type=\"number\" name=\"{lf}\" value=\"{l}\" min=\"0\" max=\"100\" aria-label=\"{n} level\" style=\"width:5rem\">% {c}</li>",
                nf = NAME_FIELD,
                lf = LEVEL_FIELD,
                n = escape(&skill.name),
                l = skill.level,
                c = list_item_controls("skills", i, skills.len())
            )
        })
        .collect();

    let prefix = pending_key("skills");
    let pending_level = form
        .get(&format!("{}_level", prefix))
        .map(str::to_string)
        .unwrap_or_else(|| NEW_SKILL_LEVEL.to_string());

    format!(
        "<fieldset class=\"list-editor\"><legend>Skills</legend><ol>{rows}</ol>\
         <div class=\"add\"><input type=\"text\" name=\"{p}_name\" value=\"{name}\" aria-label=\"New skill name\">\
         <input type=\"number\" name=\"{p}_level\" value=\"{level}\" min=\"0\" max=\"100\" aria-label=\"New skill level\" style=\"width:6rem\">\
         <button type=\"submit\" name=\"_action\" value=\"add:skills\" formnovalidate>Add</button></div></fieldset>",
        rows = rows,
        p = prefix,
        name = escape(form.get(&format!("{}_name", prefix)).unwrap_or_default()),
        level = escape(&pending_level)
    )
}

pub struct SkillAdmin(SkillUseCases);

#[async_trait]
impl AdminResource for SkillAdmin {
    type Record = SkillCategory;
    type Input = SkillCategoryInput;

    const SLUG: &'static str = "skills";
    const SINGULAR: &'static str = "Skill category";
    const PLURAL: &'static str = "Skill categories";

    fn from_state(state: &AppState) -> Self {
        Self(state.skill.clone())
    }

    async fn list(&self) -> Result<Vec<SkillCategory>, SubmitError> {
        self.0
            .list
            .execute(ListScope::All)
            .await
            .map_err(|e| SubmitError::Failed(e.to_string()))
    }

    async fn load(&self, id: Uuid) -> Result<SkillCategoryInput, SubmitError> {
        match self.0.get.execute(id).await {
            Ok(category) => Ok(SkillCategoryInput::from(&category)),
            Err(GetSkillCategoryError::NotFound) => Err(SubmitError::NotFound),
            Err(e) => Err(SubmitError::Failed(e.to_string())),
        }
    }

    async fn create(&self, input: SkillCategoryInput) -> Result<(), SubmitError> {
        match self.0.create.execute(input).await {
            Ok(_) => Ok(()),
            Err(CreateSkillCategoryError::Validation(e)) => {
                Err(SubmitError::Invalid(e.to_string()))
            }
            Err(CreateSkillCategoryError::RepositoryError(e)) => Err(SubmitError::Failed(e)),
        }
    }

    async fn update(&self, id: Uuid, input: SkillCategoryInput) -> Result<(), SubmitError> {
        match self
            .0
            .update
            .execute(id, SkillCategoryPatch::from(input))
            .await
        {
            Ok(_) => Ok(()),
            Err(UpdateSkillCategoryError::NotFound) => Err(SubmitError::NotFound),
            Err(UpdateSkillCategoryError::Validation(e)) => {
                Err(SubmitError::Invalid(e.to_string()))
            }
            Err(UpdateSkillCategoryError::RepositoryError(e)) => Err(SubmitError::Failed(e)),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), SubmitError> {
        match self.0.delete.execute(id).await {
            Ok(()) => Ok(()),
            Err(DeleteSkillCategoryError::NotFound) => Err(SubmitError::NotFound),
            Err(DeleteSkillCategoryError::RepositoryError(e)) => Err(SubmitError::Failed(e)),
        }
    }

    fn row(category: &SkillCategory) -> ListRow {
        let names: Vec<&str> = category.skills.iter().map(|s| s.name.as_str()).collect();

        ListRow {
            id: category.id,
            title: format!("{} {}", category.icon, category.title),
            detail: names.join(", "),
            hidden: !category.is_visible,
            badge: None,
        }
    }

    fn blank() -> SkillCategoryInput {
        SkillCategoryInput {
            title: String::new(),
            icon: DEFAULT_SKILL_ICON.to_string(),
            description: None,
            skills: vec![],
            order: 0,
            is_visible: true,
        }
    }

    fn parse(form: &FormFields) -> Result<SkillCategoryInput, ValidationError> {
        let levels = form
            .all(LEVEL_FIELD)
            .into_iter()
            .map(|raw| {
                let raw = raw.trim().to_string();
                if raw.is_empty() {
                    return Ok(0);
                }
                raw.parse::<i32>().map_err(|_| ValidationError::Invalid {
                    field: "skills.level",
                    message: format!("\"{}\" is not a whole number", raw),
                })
            })
            .collect::<Result<Vec<i32>, _>>()?;

        let skills = form
            .all(NAME_FIELD)
            .into_iter()
            .zip(levels.into_iter().chain(std::iter::repeat(0)))
            .map(|(name, level)| SkillEntry {
                name: name.trim().to_string(),
                level,
            })
            .collect();

        Ok(SkillCategoryInput {
            title: form.text("title"),
            icon: form.text("icon"),
            description: form.optional("description"),
            skills,
            order: form.int("order")?,
            is_visible: form.checkbox("isVisible"),
        })
    }

    fn edit_list(
        input: &mut SkillCategoryInput,
        action: &ListAction,
        form: &FormFields,
    ) -> Result<(), DraftError> {
        if action.field != "skills" {
            return Err(DraftError::UnknownList(action.field.clone()));
        }

        let mut editor = ListEditor::new(&mut input.skills, DuplicatePolicy::Reject);
        match action.op {
            ListOp::Add => editor.add(pending_entry(form)?)?,
            ListOp::Remove(index) => editor.remove(index).map(|_| ())?,
            ListOp::MoveUp(index) => editor.move_up(index)?,
            ListOp::MoveDown(index) => editor.move_down(index)?,
        }
        Ok(())
    }

    fn fields(input: &SkillCategoryInput, form: &FormFields) -> String {
        [
            text_field("title", "Title", &input.title, true),
            text_field("icon", "Icon", &input.icon, false),
            textarea_field(
                "description",
                "Description",
                input.description.as_deref().unwrap_or_default(),
            ),
            skill_rows(&input.skills, form),
            number_field("order", "Display order", input.order.into()),
            checkbox_field("isVisible", "Visible on site", input.is_visible),
        ]
        .concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::skill::application::domain::entities::fixtures::skill_category;
    use crate::shared::list_editor::ListEditError;

    fn form(pairs: &[(&str, &str)]) -> FormFields {
        FormFields::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn add() -> ListAction {
        ListAction {
            field: "skills".to_string(),
            op: ListOp::Add,
        }
    }

    #[test]
    fn parse_pairs_names_with_levels() {
        let input = SkillAdmin::parse(&form(&[
            ("title", "Languages"),
            ("skills.name", "Rust"),
            ("skills.level", "90"),
            ("skills.name", "Go"),
            ("skills.level", "60"),
            ("isVisible", "on"),
        ]))
        .unwrap();

        assert_eq!(
            input.skills,
            vec![
                SkillEntry {
                    name: "Rust".to_string(),
                    level: 90
                },
                SkillEntry {
                    name: "Go".to_string(),
                    level: 60
                },
            ]
        );
    }

    #[test]
    fn add_uses_preset_level_when_blank() {
        let mut input = SkillAdmin::blank();
        SkillAdmin::edit_list(
            &mut input,
            &add(),
            &form(&[("skills__new_name", " Rust "), ("skills__new_level", "")]),
        )
        .unwrap();

        assert_eq!(
            input.skills,
            vec![SkillEntry {
                name: "Rust".to_string(),
                level: 80
            }]
        );
    }

    #[test]
    fn add_rejects_duplicate_name() {
        let mut input = SkillCategoryInput::from(&skill_category());
        let result = SkillAdmin::edit_list(
            &mut input,
            &add(),
            &form(&[("skills__new_name", "Python"), ("skills__new_level", "10")]),
        );

        assert_eq!(
            result,
            Err(DraftError::List(ListEditError::Duplicate("Python".to_string())))
        );
    }

    #[test]
    fn remove_ignores_pending_boxes() {
        let mut input = SkillCategoryInput::from(&skill_category());
        SkillAdmin::edit_list(
            &mut input,
            &ListAction {
                field: "skills".to_string(),
                op: ListOp::Remove(0),
            },
            &form(&[("skills__new_level", "abc")]),
        )
        .unwrap();

        assert_eq!(input.skills.len(), 1);
        assert_eq!(input.skills[0].name, "SQL");
    }

    #[test]
    fn fields_keep_levels_editable() {
        let html = SkillAdmin::fields(
            &SkillCategoryInput::from(&skill_category()),
            &FormFields::default(),
        );
        assert!(html.contains("name=\"skills.name\" value=\"Python\""));
        assert!(html.contains("name=\"skills.level\" value=\"90\""));
        assert!(html.contains("name=\"skills__new_level\" value=\"80\""));
    }
}
