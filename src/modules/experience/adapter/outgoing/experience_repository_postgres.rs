use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::NullOrdering;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, QueryFilter,
    QueryOrder, Select, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::adapter::outgoing::sea_orm_entity::experiences::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::experience::application::domain::{Experience, ExperienceInput};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};
use crate::shared::listing::ListScope;

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn list_query(scope: ListScope) -> Select<Entity> {
    let mut query = Entity::find();

    if scope.visible_only() {
        query = query.filter(Column::IsVisible.eq(true));
    }

    // Undated entries sink below dated ones with the same order.
    query
        .order_by_asc(Column::SortOrder)
        .order_by_with_nulls(Column::StartDate, Order::Desc, NullOrdering::Last)
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn list(&self, scope: ListScope) -> Result<Vec<Experience>, ExperienceRepositoryError> {
        list_query(scope)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_experience)
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Experience>, ExperienceRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_experience)
            .transpose()
    }

    async fn create(&self, input: ExperienceInput) -> Result<Experience, ExperienceRepositoryError> {
        let now = Utc::now().fixed_offset();

        let mut model = ActiveModel {
            id: Set(Uuid::new_v4()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        write_input(&mut model, input)?;

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        model_to_experience(inserted)
    }

    async fn update(
        &self,
        id: Uuid,
        input: ExperienceInput,
    ) -> Result<Experience, ExperienceRepositoryError> {
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
            .ok_or(ExperienceRepositoryError::NotFound)
            .and_then(model_to_experience)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ExperienceRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ExperienceRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn write_input(
    model: &mut ActiveModel,
    input: ExperienceInput,
) -> Result<(), ExperienceRepositoryError> {
    model.role = Set(input.role);
    model.company = Set(input.company);
    model.location = Set(input.location);
    model.description = Set(input.description);
    model.start_date = Set(input.start_date);
    model.end_date = Set(input.end_date);
    model.is_current = Set(input.is_current);
    model.achievements = Set(to_json(&input.achievements)?);
    model.technologies = Set(to_json(&input.technologies)?);
    model.sort_order = Set(input.order);
    model.is_visible = Set(input.is_visible);
    Ok(())
}

fn model_to_experience(
    model: experiences::Model,
) -> Result<Experience, ExperienceRepositoryError> {
    Ok(Experience {
        id: model.id,
        role: model.role,
        company: model.company,
        location: model.location,
        description: model.description,
        start_date: model.start_date,
        end_date: model.end_date,
        is_current: model.is_current,
        achievements: from_json(model.achievements)?,
        technologies: from_json(model.technologies)?,
        order: model.sort_order,
        is_visible: model.is_visible,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn to_json(list: &[String]) -> Result<serde_json::Value, ExperienceRepositoryError> {
    serde_json::to_value(list)
        .map_err(|e| ExperienceRepositoryError::SerializationError(e.to_string()))
}

fn from_json(json: serde_json::Value) -> Result<Vec<String>, ExperienceRepositoryError> {
    serde_json::from_value(json)
        .map_err(|e| ExperienceRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ExperienceRepositoryError {
    ExperienceRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::experience::application::domain::entities::fixtures::experience_input;
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, QueryTrait, Transaction};

    fn mock_model(id: Uuid, is_current: bool) -> experiences::Model {
        let now = Utc::now().fixed_offset();
        experiences::Model {
            id,
            role: "Analyst".to_string(),
            company: "Acme".to_string(),
            location: None,
            description: None,
            start_date: NaiveDate::from_ymd_opt(2021, 1, 4),
            end_date: None,
            is_current,
            achievements: serde_json::json!(["Shipped it", "Shipped it"]),
            technologies: serde_json::json!(["SQL"]),
            sort_order: 0,
            is_visible: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn list_orders_by_order_then_latest_start_with_undated_last() {
        let sql = list_query(ListScope::All)
            .build(DatabaseBackend::Postgres)
            .to_string();

        assert!(sql.contains(
            r#"ORDER BY "experiences"."sort_order" ASC, "experiences"."start_date" DESC NULLS LAST"#
        ));
    }

    #[tokio::test]
    async fn list_issues_visible_filter_and_keeps_duplicate_entries() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(Uuid::new_v4(), true)]])
            .into_connection();

        let db = Arc::new(db);
        let repo = ExperienceRepositoryPostgres::new(Arc::clone(&db));
        let list = repo.list(ListScope::VisibleOnly).await.unwrap();

        assert_eq!(list[0].achievements, vec!["Shipped it", "Shipped it"]);

        drop(repo);
        let db = Arc::into_inner(db).unwrap();
        let log = db.into_transaction_log();
        let expected = Transaction::one(
            list_query(ListScope::VisibleOnly).build(DatabaseBackend::Postgres),
        );
        assert_eq!(log, vec![expected]);
    }

    #[tokio::test]
    async fn create_returns_record() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(id, false)]])
            .into_connection();

        let repo = ExperienceRepositoryPostgres::new(Arc::new(db));
        let created = repo.create(experience_input()).await.unwrap();

        assert_eq!(created.id, id);
        assert_eq!(created.technologies, vec!["SQL"]);
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = ExperienceRepositoryPostgres::new(Arc::new(db));
        assert!(matches!(
            repo.delete(Uuid::new_v4()).await,
            Err(ExperienceRepositoryError::NotFound)
        ));
    }
}
