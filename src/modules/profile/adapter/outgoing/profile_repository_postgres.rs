use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Insert, Set};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::profile::application::domain::{Profile, ProfileInput};
use crate::modules::profile::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError,
};

/// Columns overwritten when the profile row already exists. `id`,
/// `singleton` and `created_at` keep their first values.
const UPSERT_COLUMNS: [Column; 18] = [
    Column::Name,
    Column::Title,
    Column::Tagline,
    Column::Bio,
    Column::ShortBio,
    Column::Email,
    Column::Phone,
    Column::Location,
    Column::Availability,
    Column::AvatarUrl,
    Column::ProfileImage,
    Column::ResumeUrl,
    Column::SocialLinks,
    Column::Education,
    Column::Coursework,
    Column::Strengths,
    Column::Stats,
    Column::UpdatedAt,
];

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn upsert_conflict() -> OnConflict {
    OnConflict::column(Column::Singleton)
        .update_columns(UPSERT_COLUMNS)
        .to_owned()
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn find(&self) -> Result<Option<Profile>, ProfileRepositoryError> {
        Entity::find()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_profile)
            .transpose()
    }

    async fn upsert(&self, input: ProfileInput) -> Result<Profile, ProfileRepositoryError> {
        let saved = upsert_query(input)?
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        model_to_profile(saved)
    }
}

fn upsert_query(input: ProfileInput) -> Result<Insert<ActiveModel>, ProfileRepositoryError> {
    let now = Utc::now().fixed_offset();

    let model = ActiveModel {
        id: Set(Uuid::new_v4()),
        singleton: Set(true),
        name: Set(input.name),
        title: Set(input.title),
        tagline: Set(input.tagline),
        bio: Set(input.bio),
        short_bio: Set(input.short_bio),
        email: Set(input.email),
        phone: Set(input.phone),
        location: Set(input.location),
        availability: Set(input.availability),
        avatar_url: Set(input.avatar_url),
        profile_image: Set(input.profile_image),
        resume_url: Set(input.resume_url),
        social_links: Set(to_json(&input.social_links)?),
        education: Set(to_json(&input.education)?),
        coursework: Set(to_json(&input.coursework)?),
        strengths: Set(to_json(&input.strengths)?),
        stats: Set(to_json(&input.stats)?),
        created_at: Set(now),
        updated_at: Set(now),
    };

    Ok(Entity::insert(model).on_conflict(upsert_conflict()))
}

fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value, ProfileRepositoryError> {
    serde_json::to_value(value).map_err(|e| ProfileRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ProfileRepositoryError> {
    serde_json::from_value(value)
        .map_err(|e| ProfileRepositoryError::SerializationError(e.to_string()))
}

fn model_to_profile(model: profiles::Model) -> Result<Profile, ProfileRepositoryError> {
    Ok(Profile {
        id: model.id,
        name: model.name,
        title: model.title,
        tagline: model.tagline,
        bio: model.bio,
        short_bio: model.short_bio,
        email: model.email,
        phone: model.phone,
        location: model.location,
        availability: model.availability,
        avatar_url: model.avatar_url,
        profile_image: model.profile_image,
        resume_url: model.resume_url,
        social_links: from_json(model.social_links)?,
        education: from_json(model.education)?,
        coursework: from_json(model.coursework)?,
        strengths: from_json(model.strengths)?,
        stats: from_json(model.stats)?,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}
