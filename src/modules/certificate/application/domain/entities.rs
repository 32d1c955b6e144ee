use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::patch::PatchField;
use crate::shared::validation::{required, ValidationError};

pub const DEFAULT_CERTIFICATE_COLOR: &str = "amber";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: Uuid,
    pub title: String,
    pub platform: String,
    pub issue_date: Option<NaiveDate>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub certificate_file: Option<String>,
    pub skills: Vec<String>,
    /// Accent color name used by the public card
    pub color: String,
    pub description: Option<String>,
    pub order: i32,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_color() -> String {
    DEFAULT_CERTIFICATE_COLOR.to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CertificateInput {
    #[schema(example = "Google Data Analytics")]
    pub title: String,
    #[schema(example = "Coursera")]
    pub platform: String,
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date, example = "2024-05-01")]
    pub issue_date: Option<NaiveDate>,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub credential_url: Option<String>,
    #[serde(default)]
    pub certificate_file: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_visible: bool,
}

impl CertificateInput {
    pub fn validate(self) -> Result<Self, ValidationError> {
        Ok(Self {
            title: required("title", self.title)?,
            platform: required("platform", self.platform)?,
            issue_date: self.issue_date,
            credential_id: self.credential_id,
            credential_url: self.credential_url,
            certificate_file: self.certificate_file,
            skills: self.skills,
            color: if self.color.trim().is_empty() {
                default_color()
            } else {
                self.color
            },
            description: self.description,
            order: self.order,
            is_visible: self.is_visible,
        })
    }
}

impl From<&Certificate> for CertificateInput {
    fn from(c: &Certificate) -> Self {
        Self {
            title: c.title.clone(),
            platform: c.platform.clone(),
            issue_date: c.issue_date,
            credential_id: c.credential_id.clone(),
            credential_url: c.credential_url.clone(),
            certificate_file: c.certificate_file.clone(),
            skills: c.skills.clone(),
            color: c.color.clone(),
            description: c.description.clone(),
            order: c.order,
            is_visible: c.is_visible,
        }
    }
}

/// Partial update. `null` clears the nullable fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CertificatePatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date)]
    pub issue_date: PatchField<NaiveDate>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub credential_id: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub credential_url: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub certificate_file: PatchField<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub is_visible: Option<bool>,
}

impl CertificatePatch {
    pub fn apply_to(self, current: &Certificate) -> CertificateInput {
        let base = CertificateInput::from(current);

        CertificateInput {
            title: self.title.unwrap_or(base.title),
            platform: self.platform.unwrap_or(base.platform),
            issue_date: self.issue_date.apply(base.issue_date),
            credential_id: self.credential_id.apply(base.credential_id),
            credential_url: self.credential_url.apply(base.credential_url),
            certificate_file: self.certificate_file.apply(base.certificate_file),
            skills: self.skills.unwrap_or(base.skills),
            color: self.color.unwrap_or(base.color),
            description: self.description.apply(base.description),
            order: self.order.unwrap_or(base.order),
            is_visible: self.is_visible.unwrap_or(base.is_visible),
        }
    }
}

fn replace<T>(value: Option<T>) -> PatchField<T> {
    value.map_or(PatchField::Null, PatchField::Value)
}

impl From<CertificateInput> for CertificatePatch {
    fn from(input: CertificateInput) -> Self {
        Self {
            title: Some(input.title),
            platform: Some(input.platform),
            issue_date: replace(input.issue_date),
            credential_id: replace(input.credential_id),
            credential_url: replace(input.credential_url),
            certificate_file: replace(input.certificate_file),
            skills: Some(input.skills),
            color: Some(input.color),
            description: replace(input.description),
            order: Some(input.order),
            is_visible: Some(input.is_visible),
        }
    }
}
