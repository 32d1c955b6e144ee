use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::auth::adapter::outgoing::sea_orm_entity::admin_users::{self, Column, Entity};
use crate::auth::application::ports::outgoing::admin_user_query::{
    AdminUserQuery, AdminUserQueryError, AdminUserRecord,
};

#[derive(Clone)]
pub struct AdminUserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminUserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminUserQuery for AdminUserQueryPostgres {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AdminUserRecord>, AdminUserQueryError> {
        let model = Entity::find()
            .filter(Column::Email.eq(email.to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(|e| AdminUserQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(to_record))
    }
}

fn to_record(model: admin_users::Model) -> AdminUserRecord {
    AdminUserRecord {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        role: model.role,
    }
}
