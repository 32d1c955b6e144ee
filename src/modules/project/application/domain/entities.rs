use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::patch::PatchField;
use crate::shared::validation::{required, ValidationError};

pub const DEFAULT_PROJECT_ICON: &str = "📊";

//
// ──────────────────────────────────────────────────────────
// Category
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ProjectCategory {
    #[serde(rename = "Machine Learning")]
    MachineLearning,
    #[serde(rename = "Data Analytics")]
    DataAnalytics,
    #[serde(rename = "Web Development")]
    WebDevelopment,
}

impl ProjectCategory {
    /// Display order of the category filter on the public site.
    pub const ALL: [ProjectCategory; 3] = [
        ProjectCategory::MachineLearning,
        ProjectCategory::DataAnalytics,
        ProjectCategory::WebDevelopment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::MachineLearning => "Machine Learning",
            ProjectCategory::DataAnalytics => "Data Analytics",
            ProjectCategory::WebDevelopment => "Web Development",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectCategory {
    type Err = ValidationError;

    /// Exact match only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::Invalid {
                field: "category",
                message: format!("unknown category \"{}\"", s),
            })
    }
}

//
// ──────────────────────────────────────────────────────────
// Record
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub icon: String,
    pub category: ProjectCategory,
    pub duration: Option<String>,
    pub problem: String,
    pub solution: String,
    pub full_description: Option<String>,
    pub tech_stack: Vec<String>,
    pub features: Vec<String>,
    pub challenges: Vec<String>,
    pub results: Vec<String>,
    pub images: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
    pub order: i32,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Create input
// ──────────────────────────────────────────────────────────
//

fn default_icon() -> String {
    DEFAULT_PROJECT_ICON.to_string()
}

fn default_true() -> bool {
    true
}

/// Writable fields of a project. Omitted optional fields take their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectInput {
    #[schema(example = "Churn Prediction")]
    pub title: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    pub category: ProjectCategory,
    #[serde(default)]
    pub duration: Option<String>,
    pub problem: String,
    pub solution: String,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_visible: bool,
}

impl ProjectInput {
    /// Rejects blank required fields; a blank icon takes the default.
    pub fn validate(self) -> Result<Self, ValidationError> {
        Ok(Self {
            title: required("title", self.title)?,
            icon: if self.icon.trim().is_empty() {
                default_icon()
            } else {
                self.icon
            },
            category: self.category,
            duration: self.duration,
            problem: required("problem", self.problem)?,
            solution: required("solution", self.solution)?,
            full_description: self.full_description,
            tech_stack: self.tech_stack,
            features: self.features,
            challenges: self.challenges,
            results: self.results,
            images: self.images,
            github_url: self.github_url,
            live_url: self.live_url,
            featured: self.featured,
            order: self.order,
            is_visible: self.is_visible,
        })
    }
}

impl From<&Project> for ProjectInput {
    fn from(p: &Project) -> Self {
        Self {
            title: p.title.clone(),
            icon: p.icon.clone(),
            category: p.category,
            duration: p.duration.clone(),
            problem: p.problem.clone(),
            solution: p.solution.clone(),
            full_description: p.full_description.clone(),
            tech_stack: p.tech_stack.clone(),
            features: p.features.clone(),
            challenges: p.challenges.clone(),
            results: p.results.clone(),
            images: p.images.clone(),
            github_url: p.github_url.clone(),
            live_url: p.live_url.clone(),
            featured: p.featured,
            order: p.order,
            is_visible: p.is_visible,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Update input
// ──────────────────────────────────────────────────────────
//

/// Partial update: provided fields replace stored ones.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub category: Option<ProjectCategory>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub duration: PatchField<String>,
    #[serde(default)]
    pub problem: Option<String>,
    #[serde(default)]
    pub solution: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub full_description: PatchField<String>,
    #[serde(default)]
    pub tech_stack: Option<Vec<String>>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub challenges: Option<Vec<String>>,
    #[serde(default)]
    pub results: Option<Vec<String>>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub github_url: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub live_url: PatchField<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub is_visible: Option<bool>,
}

impl ProjectPatch {
    /// Merge over the stored record. The result still needs validating.
    pub fn apply_to(self, current: &Project) -> ProjectInput {
        let base = ProjectInput::from(current);

        ProjectInput {
            title: self.title.unwrap_or(base.title),
            icon: self.icon.unwrap_or(base.icon),
            category: self.category.unwrap_or(base.category),
            duration: self.duration.apply(base.duration),
            problem: self.problem.unwrap_or(base.problem),
            solution: self.solution.unwrap_or(base.solution),
            full_description: self.full_description.apply(base.full_description),
            tech_stack: self.tech_stack.unwrap_or(base.tech_stack),
            features: self.features.unwrap_or(base.features),
            challenges: self.challenges.unwrap_or(base.challenges),
            results: self.results.unwrap_or(base.results),
            images: self.images.unwrap_or(base.images),
            github_url: self.github_url.apply(base.github_url),
            live_url: self.live_url.apply(base.live_url),
            featured: self.featured.unwrap_or(base.featured),
            order: self.order.unwrap_or(base.order),
            is_visible: self.is_visible.unwrap_or(base.is_visible),
        }
    }
}

/// A full replacement, as submitted by the admin edit form.
impl From<ProjectInput> for ProjectPatch {
    fn from(input: ProjectInput) -> Self {
        Self {
            title: Some(input.title),
            icon: Some(input.icon),
            category: Some(input.category),
            duration: input.duration.map_or(PatchField::Null, PatchField::Value),
            problem: Some(input.problem),
            solution: Some(input.solution),
            full_description: input
                .full_description
                .map_or(PatchField::Null, PatchField::Value),
            tech_stack: Some(input.tech_stack),
            features: Some(input.features),
            challenges: Some(input.challenges),
            results: Some(input.results),
            images: Some(input.images),
            github_url: input.github_url.map_or(PatchField::Null, PatchField::Value),
            live_url: input.live_url.map_or(PatchField::Null, PatchField::Value),
            featured: Some(input.featured),
            order: Some(input.order),
            is_visible: Some(input.is_visible),
        }
    }
}
