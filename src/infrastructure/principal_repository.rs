use async_trait::async_trait;
use chrono::Utc;
use entity::iam_principals;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, SqlErr,
};
use uuid::Uuid;

use crate::domain::{
    error::RepositoryError,
    models::principal::{IamPrincipal, NewPrincipal, PrincipalStatus},
    repositories::principal_repository::PrincipalRepository,
};

#[derive(Clone)]
pub struct PostgresPrincipalRepository {
    db: DatabaseConnection,
}

impl PostgresPrincipalRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PrincipalRepository for PostgresPrincipalRepository {
    type Principal = IamPrincipal;
    type NewPrincipal = NewPrincipal;

    async fn create_principal(&self, attrs: NewPrincipal) -> Result<Uuid, RepositoryError> {
        let id = Uuid::new_v4();
        let model = iam_principals::ActiveModel {
            id: Set(id),
            login: Set(attrs.login),
            kind: Set(attrs.kind),
            name: Set(attrs.name),
            status: Set(PrincipalStatus::Active.as_str().to_string()),
            create_timestamp: Set(Utc::now().fixed_offset()),
        };
        iam_principals::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(message)) => {
                    RepositoryError::Duplicate(message)
                }
                _ => RepositoryError::DatabaseError(e.to_string()),
            })?;
        Ok(id)
    }

    async fn find_active_by_login(
        &self,
        login: &str,
    ) -> Result<Option<IamPrincipal>, RepositoryError> {
        let model = iam_principals::Entity::find()
            .filter(iam_principals::Column::Login.eq(login))
            .filter(iam_principals::Column::Status.eq(PrincipalStatus::Active.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        match model {
            Some(model) => {
                let status = model
                    .status
                    .parse::<PrincipalStatus>()
                    .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

                let principal = IamPrincipal::new(
                    model.id,
                    model.login,
                    model.kind,
                    model.name,
                    status,
                    model.create_timestamp.naive_utc().and_utc(),
                )
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

                Ok(Some(principal))
            }
            None => Ok(None),
        }
    }
}
