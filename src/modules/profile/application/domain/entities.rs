use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::patch::PatchField;
use crate::shared::validation::{required, ValidationError};

//
// ──────────────────────────────────────────────────────────
// Embedded objects
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct SocialLinks {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct Education {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub year: Option<String>,
    pub description: Option<String>,
}

impl Education {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Headline numbers shown in the about section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ProfileStats {
    pub projects_completed: u32,
    pub certifications_earned: u32,
    pub technologies_mastered: u32,
}

//
// ──────────────────────────────────────────────────────────
// Record
// ──────────────────────────────────────────────────────────
//

/// The site owner's profile. There is at most one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub tagline: Option<String>,
    pub bio: Option<String>,
    pub short_bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub availability: Option<String>,
    pub avatar_url: Option<String>,
    pub profile_image: Option<String>,
    pub resume_url: Option<String>,
    pub social_links: SocialLinks,
    pub education: Education,
    pub coursework: Vec<String>,
    pub strengths: Vec<String>,
    pub stats: ProfileStats,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProfileInput {
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "Data Scientist")]
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub short_bio: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub education: Education,
    #[serde(default)]
    pub coursework: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub stats: ProfileStats,
}

impl ProfileInput {
    pub fn validate(self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required("name", self.name)?,
            title: required("title", self.title)?,
            tagline: self.tagline,
            bio: self.bio,
            short_bio: self.short_bio,
            email: self.email,
            phone: self.phone,
            location: self.location,
            availability: self.availability,
            avatar_url: self.avatar_url,
            profile_image: self.profile_image,
            resume_url: self.resume_url,
            social_links: self.social_links,
            education: self.education,
            coursework: self.coursework,
            strengths: self.strengths,
            stats: self.stats,
        })
    }
}

impl From<&Profile> for ProfileInput {
    fn from(p: &Profile) -> Self {
        Self {
            name: p.name.clone(),
            title: p.title.clone(),
            tagline: p.tagline.clone(),
            bio: p.bio.clone(),
            short_bio: p.short_bio.clone(),
            email: p.email.clone(),
            phone: p.phone.clone(),
            location: p.location.clone(),
            availability: p.availability.clone(),
            avatar_url: p.avatar_url.clone(),
            profile_image: p.profile_image.clone(),
            resume_url: p.resume_url.clone(),
            social_links: p.social_links.clone(),
            education: p.education.clone(),
            coursework: p.coursework.clone(),
            strengths: p.strengths.clone(),
            stats: p.stats,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Upsert body
// ──────────────────────────────────────────────────────────
//

/// Body of `PUT /api/profile`. Provided fields replace stored ones; embedded
/// objects are replaced whole.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProfilePatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub tagline: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub bio: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub short_bio: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub email: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub phone: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub location: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub availability: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub avatar_url: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub profile_image: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub resume_url: PatchField<String>,
    #[serde(default)]
    pub social_links: Option<SocialLinks>,
    #[serde(default)]
    pub education: Option<Education>,
    #[serde(default)]
    pub coursework: Option<Vec<String>>,
    #[serde(default)]
    pub strengths: Option<Vec<String>>,
    #[serde(default)]
    pub stats: Option<ProfileStats>,
}

impl ProfilePatch {
    /// Merge over the stored profile, or over an empty one on first save.
    pub fn apply_to(self, current: Option<&Profile>) -> ProfileInput {
        let base = current.map(ProfileInput::from).unwrap_or_default();

        ProfileInput {
            name: self.name.unwrap_or(base.name),
            title: self.title.unwrap_or(base.title),
            tagline: self.tagline.apply(base.tagline),
            bio: self.bio.apply(base.bio),
            short_bio: self.short_bio.apply(base.short_bio),
            email: self.email.apply(base.email),
            phone: self.phone.apply(base.phone),
            location: self.location.apply(base.location),
            availability: self.availability.apply(base.availability),
            avatar_url: self.avatar_url.apply(base.avatar_url),
            profile_image: self.profile_image.apply(base.profile_image),
            resume_url: self.resume_url.apply(base.resume_url),
            social_links: self.social_links.unwrap_or(base.social_links),
            education: self.education.unwrap_or(base.education),
            coursework: self.coursework.unwrap_or(base.coursework),
            strengths: self.strengths.unwrap_or(base.strengths),
            stats: self.stats.unwrap_or(base.stats),
        }
    }
}

fn replace(value: Option<String>) -> PatchField<String> {
    value.map_or(PatchField::Null, PatchField::Value)
}

/// A full replacement, as submitted by the admin profile form.
impl From<ProfileInput> for ProfilePatch {
    fn from(input: ProfileInput) -> Self {
        Self {
            name: Some(input.name),
            title: Some(input.title),
            tagline: replace(input.tagline),
            bio: replace(input.bio),
            short_bio: replace(input.short_bio),
            email: replace(input.email),
            phone: replace(input.phone),
            location: replace(input.location),
            availability: replace(input.availability),
            avatar_url: replace(input.avatar_url),
            profile_image: replace(input.profile_image),
            resume_url: replace(input.resume_url),
            social_links: Some(input.social_links),
            education: Some(input.education),
            coursework: Some(input.coursework),
            strengths: Some(input.strengths),
            stats: Some(input.stats),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn first_save_without_name_is_rejected() {
        let patch: ProfilePatch = serde_json::from_value(json!({ "title": "Analyst" })).unwrap();
        assert_eq!(
            patch.apply_to(None).validate(),
            Err(ValidationError::Required("name"))
        );
    }

    #[test]
    fn first_save_takes_defaults() {
        let patch: ProfilePatch =
            serde_json::from_value(json!({ "name": "Jane", "title": "Analyst" })).unwrap();
        let input = patch.apply_to(None).validate().unwrap();

        assert_eq!(input.stats, ProfileStats::default());
        assert!(input.coursework.is_empty());
        assert!(input.education.is_empty());
    }

    #[test]
    fn patch_keeps_unmentioned_fields() {
        let current = profile();
        let patch: ProfilePatch = serde_json::from_value(json!({
            "tagline": null,
            "stats": { "projectsCompleted": 13 }
        }))
        .unwrap();

        let merged = patch.apply_to(Some(&current));
        assert_eq!(merged.name, current.name);
        assert_eq!(merged.tagline, None);
        assert_eq!(merged.stats.projects_completed, 13);
        assert_eq!(merged.stats.certifications_earned, 0);
        assert_eq!(merged.social_links, current.social_links);
    }

    #[test]
    fn negative_stat_is_rejected() {
        let result = serde_json::from_value::<ProfilePatch>(json!({
            "stats": { "projectsCompleted": -1 }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_social_link_is_rejected() {
        let result = serde_json::from_value::<ProfilePatch>(json!({
            "socialLinks": { "myspace": "x" }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn validate_keeps_submitted_text() {
        let mut input = profile_input();
        input.name = " Ada ".to_string();
        input.social_links.website = Some("  ".to_string());
        input.education.description = Some(" Honours ".to_string());
        input.strengths = vec!["".to_string(), " Focus ".to_string()];

        let valid = input.validate().unwrap();
        assert_eq!(valid.name, " Ada ");
        assert_eq!(valid.social_links.website.as_deref(), Some("  "));
        assert_eq!(valid.education.description.as_deref(), Some(" Honours "));
        assert_eq!(valid.strengths, vec!["", " Focus "]);
    }

    #[test]
    fn record_serializes_camel_case() {
        let value = serde_json::to_value(profile()).unwrap();
        assert!(value.get("socialLinks").is_some());
        assert_eq!(value["stats"]["projectsCompleted"], 12);
    }
}
