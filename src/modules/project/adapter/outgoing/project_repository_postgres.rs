use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Select, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::project::application::domain::{Project, ProjectCategory, ProjectInput};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::shared::listing::ListScope;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Featured first, then `order`, then newest.
fn list_query(scope: ListScope) -> Select<Entity> {
    let mut query = Entity::find();

    if scope.visible_only() {
        query = query.filter(Column::IsVisible.eq(true));
    }

    query
        .order_by_desc(Column::Featured)
        .order_by_asc(Column::SortOrder)
        .order_by_desc(Column::CreatedAt)
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn list(&self, scope: ListScope) -> Result<Vec<Project>, ProjectRepositoryError> {
        list_query(scope)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_project)
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, ProjectRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_project)
            .transpose()
    }

    async fn create(&self, input: ProjectInput) -> Result<Project, ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();

        let mut model = ActiveModel {
            id: Set(Uuid::new_v4()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        write_input(&mut model, input)?;

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        model_to_project(inserted)
    }

    async fn update(
        &self,
        id: Uuid,
        input: ProjectInput,
    ) -> Result<Project, ProjectRepositoryError> {
        let mut model = ActiveModel {
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };
        write_input(&mut model, input)?;

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = updated
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        model_to_project(result)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn write_input(model: &mut ActiveModel, input: ProjectInput) -> Result<(), ProjectRepositoryError> {
    model.title = Set(input.title);
    model.icon = Set(input.icon);
    model.category = Set(input.category.as_str().to_string());
    model.duration = Set(input.duration);
    model.problem = Set(input.problem);
    model.solution = Set(input.solution);
    model.full_description = Set(input.full_description);
    model.tech_stack = Set(to_json(&input.tech_stack)?);
    model.features = Set(to_json(&input.features)?);
    model.challenges = Set(to_json(&input.challenges)?);
    model.results = Set(to_json(&input.results)?);
    model.images = Set(to_json(&input.images)?);
    model.github_url = Set(input.github_url);
    model.live_url = Set(input.live_url);
    model.featured = Set(input.featured);
    model.sort_order = Set(input.order);
    model.is_visible = Set(input.is_visible);
    Ok(())
}

fn model_to_project(model: projects::Model) -> Result<Project, ProjectRepositoryError> {
    let category = model
        .category
        .parse::<ProjectCategory>()
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))?;

    Ok(Project {
        id: model.id,
        title: model.title,
        icon: model.icon,
        category,
        duration: model.duration,
        problem: model.problem,
        solution: model.solution,
        full_description: model.full_description,
        tech_stack: from_json(&model.tech_stack)?,
        features: from_json(&model.features)?,
        challenges: from_json(&model.challenges)?,
        results: from_json(&model.results)?,
        images: from_json(&model.images)?,
        github_url: model.github_url,
        live_url: model.live_url,
        featured: model.featured,
        order: model.sort_order,
        is_visible: model.is_visible,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProjectRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ProjectRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
