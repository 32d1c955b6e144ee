use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Select, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::certificate::adapter::outgoing::sea_orm_entity::certificates::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::certificate::application::domain::{Certificate, CertificateInput};
use crate::modules::certificate::application::ports::outgoing::{
    CertificateRepository, CertificateRepositoryError,
};
use crate::shared::listing::ListScope;

#[derive(Clone)]
pub struct CertificateRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CertificateRepositoryPostgres {
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
impl CertificateRepository for CertificateRepositoryPostgres {
    async fn list(&self, scope: ListScope) -> Result<Vec<Certificate>, CertificateRepositoryError> {
        list_query(scope)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_certificate)
            .collect()
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<Certificate>, CertificateRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_certificate)
            .transpose()
    }

    async fn create(
        &self,
        input: CertificateInput,
    ) -> Result<Certificate, CertificateRepositoryError> {
        let now = Utc::now().fixed_offset();

        let mut model = ActiveModel {
            id: Set(Uuid::new_v4()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        write_input(&mut model, input)?;

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        model_to_certificate(inserted)
    }

    async fn update(
        &self,
        id: Uuid,
        input: CertificateInput,
    ) -> Result<Certificate, CertificateRepositoryError> {
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
            .ok_or(CertificateRepositoryError::NotFound)
            .and_then(model_to_certificate)
    }

    async fn delete(&self, id: Uuid) -> Result<(), CertificateRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CertificateRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn write_input(
    model: &mut ActiveModel,
    input: CertificateInput,
) -> Result<(), CertificateRepositoryError> {
    model.title = Set(input.title);
    model.platform = Set(input.platform);
    model.issue_date = Set(input.issue_date);
    model.credential_id = Set(input.credential_id);
    model.credential_url = Set(input.credential_url);
    model.certificate_file = Set(input.certificate_file);
    model.skills = Set(serde_json::to_value(&input.skills)
        .map_err(|e| CertificateRepositoryError::SerializationError(e.to_string()))?);
    model.color = Set(input.color);
    model.description = Set(input.description);
    model.sort_order = Set(input.order);
    model.is_visible = Set(input.is_visible);
    Ok(())
}

fn model_to_certificate(
    model: certificates::Model,
) -> Result<Certificate, CertificateRepositoryError> {
    let skills = serde_json::from_value(model.skills)
        .map_err(|e| CertificateRepositoryError::SerializationError(e.to_string()))?;

    Ok(Certificate {
        id: model.id,
        title: model.title,
        platform: model.platform,
        issue_date: model.issue_date,
        credential_id: model.credential_id,
        credential_url: model.credential_url,
        certificate_file: model.certificate_file,
        skills,
        color: model.color,
        description: model.description,
        order: model.sort_order,
        is_visible: model.is_visible,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> CertificateRepositoryError {
    CertificateRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::certificate::application::domain::entities::fixtures::certificate_input;
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, QueryTrait};

    fn mock_model(id: Uuid) -> certificates::Model {
        let now = Utc::now().fixed_offset();
        certificates::Model {
            id,
            title: "X".to_string(),
            platform: "Y".to_string(),
            issue_date: NaiveDate::from_ymd_opt(2024, 2, 29),
            credential_id: None,
            credential_url: None,
            certificate_file: None,
            skills: serde_json::json!(["Excel"]),
            color: "amber".to_string(),
            description: None,
            sort_order: 0,
            is_visible: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn list_orders_by_order_then_newest() {
        let sql = list_query(ListScope::VisibleOnly)
            .build(DatabaseBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#"WHERE "certificates"."is_visible""#));
        assert!(sql.contains(
            r#"ORDER BY "certificates"."sort_order" ASC, "certificates"."created_at" DESC"#
        ));
    }

    #[tokio::test]
    async fn create_maps_inserted_row() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(id)]])
            .into_connection();

        let repo = CertificateRepositoryPostgres::new(Arc::new(db));
        let created = repo.create(certificate_input()).await.unwrap();

        assert_eq!(created.id, id);
        assert_eq!(created.order, 0);
        assert!(created.is_visible);
        assert_eq!(created.skills, vec!["Excel"]);
        assert_eq!(created.issue_date, NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[tokio::test]
    async fn update_without_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<certificates::Model>::new()])
            .into_connection();

        let repo = CertificateRepositoryPostgres::new(Arc::new(db));
        let result = repo.update(Uuid::new_v4(), certificate_input()).await;

        assert!(matches!(result, Err(CertificateRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn delete_without_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = CertificateRepositoryPostgres::new(Arc::new(db));
        assert!(matches!(
            repo.delete(Uuid::new_v4()).await,
            Err(CertificateRepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn malformed_skills_json_is_serialization_error() {
        let mut model = mock_model(Uuid::new_v4());
        model.skills = serde_json::json!({ "not": "a list" });

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = CertificateRepositoryPostgres::new(Arc::new(db));
        assert!(matches!(
            repo.list(ListScope::All).await,
            Err(CertificateRepositoryError::SerializationError(_))
        ));
    }
}
