use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::patch::PatchField;
use crate::shared::validation::{required, ValidationError};

pub const DEFAULT_SKILL_ICON: &str = "🔧";
pub const MIN_SKILL_LEVEL: i32 = 0;
pub const MAX_SKILL_LEVEL: i32 = 100;

/// One named skill with a proficiency percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct SkillEntry {
    #[schema(example = "Python")]
    pub name: String,
    #[serde(default)]
    #[schema(minimum = 0, maximum = 100, example = 85)]
    pub level: i32,
}

impl SkillEntry {
    fn validate(self) -> Result<Self, ValidationError> {
        if !(MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL).contains(&self.level) {
            return Err(ValidationError::OutOfRange {
                field: "skills.level",
                min: MIN_SKILL_LEVEL as i64,
                max: MAX_SKILL_LEVEL as i64,
            });
        }

        Ok(Self {
            name: required("skills.name", self.name)?,
            level: self.level,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub id: Uuid,
    pub title: String,
    pub icon: String,
    pub description: Option<String>,
    pub skills: Vec<SkillEntry>,
    pub order: i32,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_icon() -> String {
    DEFAULT_SKILL_ICON.to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SkillCategoryInput {
    #[schema(example = "Data Analysis")]
    pub title: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_visible: bool,
}

impl SkillCategoryInput {
    pub fn validate(self) -> Result<Self, ValidationError> {
        Ok(Self {
            title: required("title", self.title)?,
            icon: if self.icon.trim().is_empty() {
                default_icon()
            } else {
                self.icon
            },
            description: self.description,
            skills: self
                .skills
                .into_iter()
                .map(SkillEntry::validate)
                .collect::<Result<_, _>>()?,
            order: self.order,
            is_visible: self.is_visible,
        })
    }
}

impl From<&SkillCategory> for SkillCategoryInput {
    fn from(c: &SkillCategory) -> Self {
        Self {
            title: c.title.clone(),
            icon: c.icon.clone(),
            description: c.description.clone(),
            skills: c.skills.clone(),
            order: c.order,
            is_visible: c.is_visible,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SkillCategoryPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub skills: Option<Vec<SkillEntry>>,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub is_visible: Option<bool>,
}

impl SkillCategoryPatch {
    pub fn apply_to(self, current: &SkillCategory) -> SkillCategoryInput {
        let base = SkillCategoryInput::from(current);

        SkillCategoryInput {
            title: self.title.unwrap_or(base.title),
            icon: self.icon.unwrap_or(base.icon),
            description: self.description.apply(base.description),
            skills: self.skills.unwrap_or(base.skills),
            order: self.order.unwrap_or(base.order),
            is_visible: self.is_visible.unwrap_or(base.is_visible),
        }
    }
}

impl From<SkillCategoryInput> for SkillCategoryPatch {
    fn from(input: SkillCategoryInput) -> Self {
        Self {
            title: Some(input.title),
            icon: Some(input.icon),
            description: input.description.map_or(PatchField::Null, PatchField::Value),
            skills: Some(input.skills),
            order: Some(input.order),
            is_visible: Some(input.is_visible),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn level_defaults_to_zero() {
        let input: SkillCategoryInput = serde_json::from_value(json!({
            "title": "Tools",
            "skills": [{ "name": "Git" }]
        }))
        .unwrap();

        assert_eq!(input.icon, "🔧");
        assert_eq!(input.skills[0].level, 0);
    }

    #[test]
    fn level_above_hundred_is_out_of_range() {
        let mut input = skill_category_input();
        input.skills[1].level = 101;

        assert_eq!(
            input.validate(),
            Err(ValidationError::OutOfRange {
                field: "skills.level",
                min: 0,
                max: 100
            })
        );
    }

    #[test]
    fn negative_level_is_out_of_range() {
        let mut input = skill_category_input();
        input.skills[0].level = -1;
        assert!(input.validate().is_err());
    }

    #[test]
    fn blank_skill_name_is_required() {
        let mut input = skill_category_input();
        input.skills[0].name = " ".to_string();

        assert_eq!(
            input.validate(),
            Err(ValidationError::Required("skills.name"))
        );
    }

    #[test]
    fn boundary_levels_are_accepted() {
        let mut input = skill_category_input();
        input.skills[0].level = 0;
        input.skills[1].level = 100;
        assert!(input.validate().is_ok());
    }
}
