use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Select, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::skill::adapter::outgoing::sea_orm_entity::skill_categories::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::skill::application::domain::{SkillCategory, SkillCategoryInput};
use crate::modules::skill::application::ports::outgoing::{
    SkillCategoryRepository, SkillCategoryRepositoryError,
};
use crate::shared::listing::ListScope;

#[derive(Clone)]
pub struct SkillCategoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillCategoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn list_query(scope: ListScope) -> Select<Entity> {
    let mut query = Entity::find();

    if scope.visible_only() {
        query = query.filter(Column::IsVisible.eq(true));
    }

    query
        .order_by_asc(Column::SortOrder)
        .order_by_desc(Column::CreatedAt)
}

#[async_trait]
impl SkillCategoryRepository for SkillCategoryRepositoryPostgres {
    async fn list(
        &self,
        scope: ListScope,
    ) -> Result<Vec<SkillCategory>, SkillCategoryRepositoryError> {
        list_query(scope)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_category)
            .collect()
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<SkillCategory>, SkillCategoryRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_category)
            .transpose()
    }

    async fn create(
        &self,
        input: SkillCategoryInput,
    ) -> Result<SkillCategory, SkillCategoryRepositoryError> {
        let now = Utc::now().fixed_offset();

        let mut model = ActiveModel {
            id: Set(Uuid::new_v4()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        write_input(&mut model, input)?;

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        model_to_category(inserted)
    }

    async fn update(
        &self,
        id: Uuid,
        input: SkillCategoryInput,
    ) -> Result<SkillCategory, SkillCategoryRepositoryError> {
        let mut model = ActiveModel {
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };
        write_input(&mut model, input)?;

        Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(SkillCategoryRepositoryError::NotFound)
            .and_then(model_to_category)
    }

    async fn delete(&self, id: Uuid) -> Result<(), SkillCategoryRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SkillCategoryRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn write_input(
    model: &mut ActiveModel,
    input: SkillCategoryInput,
) -> Result<(), SkillCategoryRepositoryError> {
    let skills = serde_json::to_value(&input.skills)
        .map_err(|e| SkillCategoryRepositoryError::SerializationError(e.to_string()))?;

    model.title = Set(input.title);
    model.icon = Set(input.icon);
    model.description = Set(input.description);
    model.skills = Set(skills);
    model.sort_order = Set(input.order);
    model.is_visible = Set(input.is_visible);
    Ok(())
}

fn model_to_category(
    model: skill_categories::Model,
) -> Result<SkillCategory, SkillCategoryRepositoryError> {
    let skills = serde_json::from_value(model.skills)
        .map_err(|e| SkillCategoryRepositoryError::SerializationError(e.to_string()))?;

    Ok(SkillCategory {
        id: model.id,
        title: model.title,
        icon: model.icon,
        description: model.description,
        skills,
        order: model.sort_order,
        is_visible: model.is_visible,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> SkillCategoryRepositoryError {
    SkillCategoryRepositoryError::DatabaseError(e.to_string())
}
