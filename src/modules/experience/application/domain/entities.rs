use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::patch::PatchField;
use crate::shared::validation::{required, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: Uuid,
    pub role: String,
    pub company: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    /// Always absent while `is_current` is set
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
    pub order: i32,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Admin listing order: current positions ahead of past ones, otherwise
/// keeping the stored order.
pub fn current_first(experiences: &mut [Experience]) {
    experiences.sort_by_key(|e| !e.is_current);
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExperienceInput {
    #[schema(example = "Data Analyst")]
    pub role: String,
    #[schema(example = "Acme Corp")]
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date, example = "2023-01-15")]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_visible: bool,
}

impl ExperienceInput {
    /// A current position never keeps an end date.
    pub fn validate(self) -> Result<Self, ValidationError> {
        Ok(Self {
            role: required("role", self.role)?,
            company: required("company", self.company)?,
            location: self.location,
            description: self.description,
            start_date: self.start_date,
            end_date: if self.is_current { None } else { self.end_date },
            is_current: self.is_current,
            achievements: self.achievements,
            technologies: self.technologies,
            order: self.order,
            is_visible: self.is_visible,
        })
    }
}

impl From<&Experience> for ExperienceInput {
    fn from(e: &Experience) -> Self {
        Self {
            role: e.role.clone(),
            company: e.company.clone(),
            location: e.location.clone(),
            description: e.description.clone(),
            start_date: e.start_date,
            end_date: e.end_date,
            is_current: e.is_current,
            achievements: e.achievements.clone(),
            technologies: e.technologies.clone(),
            order: e.order,
            is_visible: e.is_visible,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExperiencePatch {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub location: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date)]
    pub start_date: PatchField<NaiveDate>,
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date)]
    pub end_date: PatchField<NaiveDate>,
    #[serde(default)]
    pub is_current: Option<bool>,
    #[serde(default)]
    pub achievements: Option<Vec<String>>,
    #[serde(default)]
    pub technologies: Option<Vec<String>>,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub is_visible: Option<bool>,
}

impl ExperiencePatch {
    pub fn apply_to(self, current: &Experience) -> ExperienceInput {
        let base = ExperienceInput::from(current);

        ExperienceInput {
            role: self.role.unwrap_or(base.role),
            company: self.company.unwrap_or(base.company),
            location: self.location.apply(base.location),
            description: self.description.apply(base.description),
            start_date: self.start_date.apply(base.start_date),
            end_date: self.end_date.apply(base.end_date),
            is_current: self.is_current.unwrap_or(base.is_current),
            achievements: self.achievements.unwrap_or(base.achievements),
            technologies: self.technologies.unwrap_or(base.technologies),
            order: self.order.unwrap_or(base.order),
            is_visible: self.is_visible.unwrap_or(base.is_visible),
        }
    }
}

fn replace<T>(value: Option<T>) -> PatchField<T> {
    value.map_or(PatchField::Null, PatchField::Value)
}

impl From<ExperienceInput> for ExperiencePatch {
    fn from(input: ExperienceInput) -> Self {
        Self {
            role: Some(input.role),
            company: Some(input.company),
            location: replace(input.location),
            description: replace(input.description),
            start_date: replace(input.start_date),
            end_date: replace(input.end_date),
            is_current: Some(input.is_current),
            achievements: Some(input.achievements),
            technologies: Some(input.technologies),
            order: Some(input.order),
            is_visible: Some(input.is_visible),
        }
    }
}
