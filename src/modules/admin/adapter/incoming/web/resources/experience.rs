use async_trait::async_trait;
use uuid::Uuid;

use super::edit_strings;
use crate::modules::admin::adapter::incoming::web::form::{FormFields, ListAction};
use crate::modules::admin::adapter::incoming::web::render::{
    checkbox_field, date_field, number_field, string_list, text_field, textarea_field,
};
use crate::modules::admin::adapter::incoming::web::resource::{
    AdminResource, DraftError, ListRow, SubmitError,
};
use crate::modules::experience::application::domain::{
    current_first, Experience, ExperienceInput, ExperiencePatch,
};
use crate::modules::experience::application::experience_use_cases::ExperienceUseCases;
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceError, DeleteExperienceError, GetExperienceError, UpdateExperienceError,
};
use crate::shared::list_editor::DuplicatePolicy;
use crate::shared::listing::ListScope;
use crate::shared::validation::ValidationError;
use crate::AppState;

pub struct ExperienceAdmin(ExperienceUseCases);

fn period(experience: &Experience) -> String {
    let start = experience
        .start_date
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|| "?".to_string());
    let end = match (experience.is_current, experience.end_date) {
        (true, _) => "Present".to_string(),
        (false, Some(d)) => d.format("%b %Y").to_string(),
        (false, None) => "?".to_string(),
    };
    format!("{} – {}", start, end)
}

#[async_trait]
impl AdminResource for ExperienceAdmin {
    type Record = Experience;
    type Input = ExperienceInput;

    const SLUG: &'static str = "experience";
    const SINGULAR: &'static str = "Experience";
    const PLURAL: &'static str = "Experience";

    fn from_state(state: &AppState) -> Self {
        Self(state.experience.clone())
    }

    async fn list(&self) -> Result<Vec<Experience>, SubmitError> {
        let mut experiences = self
            .0
            .list
            .execute(ListScope::All)
            .await
            .map_err(|e| SubmitError::Failed(e.to_string()))?;
        current_first(&mut experiences);
        Ok(experiences)
    }

    async fn load(&self, id: Uuid) -> Result<ExperienceInput, SubmitError> {
        match self.0.get.execute(id).await {
            Ok(experience) => Ok(ExperienceInput::from(&experience)),
            Err(GetExperienceError::NotFound) => Err(SubmitError::NotFound),
            Err(e) => Err(SubmitError::Failed(e.to_string())),
        }
    }

    async fn create(&self, input: ExperienceInput) -> Result<(), SubmitError> {
        match self.0.create.execute(input).await {
            Ok(_) => Ok(()),
            Err(CreateExperienceError::Validation(e)) => Err(SubmitError::Invalid(e.to_string())),
            Err(CreateExperienceError::RepositoryError(e)) => Err(SubmitError::Failed(e)),
        }
    }

    async fn update(&self, id: Uuid, input: ExperienceInput) -> Result<(), SubmitError> {
        match self.0.update.execute(id, ExperiencePatch::from(input)).await {
            Ok(_) => Ok(()),
            Err(UpdateExperienceError::NotFound) => Err(SubmitError::NotFound),
            Err(UpdateExperienceError::Validation(e)) => Err(SubmitError::Invalid(e.to_string())),
            Err(UpdateExperienceError::RepositoryError(e)) => Err(SubmitError::Failed(e)),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), SubmitError> {
        match self.0.delete.execute(id).await {
            Ok(()) => Ok(()),
            Err(DeleteExperienceError::NotFound) => Err(SubmitError::NotFound),
            Err(DeleteExperienceError::RepositoryError(e)) => Err(SubmitError::Failed(e)),
        }
    }

    fn row(experience: &Experience) -> ListRow {
        ListRow {
            id: experience.id,
            title: format!("{} at {}", experience.role, experience.company),
            detail: period(experience),
            hidden: !experience.is_visible,
            badge: experience.is_current.then(|| "Current".to_string()),
        }
    }

    fn blank() -> ExperienceInput {
        ExperienceInput {
            role: String::new(),
            company: String::new(),
            location: None,
            description: None,
            start_date: None,
            end_date: None,
            is_current: false,
            achievements: vec![],
            technologies: vec![],
            order: 0,
            is_visible: true,
        }
    }

    fn parse(form: &FormFields) -> Result<ExperienceInput, ValidationError> {
        Ok(ExperienceInput {
            role: form.text("role"),
            company: form.text("company"),
            location: form.optional("location"),
            description: form.optional("description"),
            start_date: form.date("startDate")?,
            end_date: form.date("endDate")?,
            is_current: form.checkbox("isCurrent"),
            achievements: form.list("achievements"),
            technologies: form.list("technologies"),
            order: form.int("order")?,
            is_visible: form.checkbox("isVisible"),
        })
    }

    fn edit_list(
        input: &mut ExperienceInput,
        action: &ListAction,
        form: &FormFields,
    ) -> Result<(), DraftError> {
        let (items, policy) = match action.field.as_str() {
            "technologies" => (&mut input.technologies, DuplicatePolicy::Reject),
            "achievements" => (&mut input.achievements, DuplicatePolicy::Allow),
            other => return Err(DraftError::UnknownList(other.to_string())),
        };
        edit_strings(items, policy, action, form)
    }

    fn fields(input: &ExperienceInput, form: &FormFields) -> String {
        [
            text_field("role", "Role", &input.role, true),
            text_field("company", "Company", &input.company, true),
            text_field(
                "location",
                "Location",
                input.location.as_deref().unwrap_or_default(),
                false,
            ),
            textarea_field(
                "description",
                "Description",
                input.description.as_deref().unwrap_or_default(),
            ),
            date_field("startDate", "Start date", input.start_date),
            date_field("endDate", "End date", input.end_date),
            checkbox_field("isCurrent", "Current position", input.is_current),
            string_list("achievements", "Achievements", &input.achievements, form),
            string_list("technologies", "Technologies", &input.technologies, form),
            number_field("order", "Display order", input.order.into()),
            checkbox_field("isVisible", "Visible on site", input.is_visible),
        ]
        .concat()
    }
}
