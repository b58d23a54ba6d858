use async_trait::async_trait;
use chrono::{DateTime, Utc};
use entity::iam_passwords;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    sea_query::Expr,
};
use uuid::Uuid;

use crate::domain::{
    error::RepositoryError,
    models::credential::{Credential, HashedPassword},
    repositories::credential_repository::CredentialRepository,
};

#[derive(Clone)]
pub struct PostgresCredentialRepository {
    db: DatabaseConnection,
}

impl PostgresCredentialRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialRepository for PostgresCredentialRepository {
    async fn create_credential(
        &self,
        principal_id: Uuid,
        password_hash: HashedPassword,
        create_timestamp: DateTime<Utc>,
    ) -> Result<Uuid, RepositoryError> {
        let id = Uuid::new_v4();
        let credential = iam_passwords::ActiveModel {
            id: Set(id),
            principal_id: Set(principal_id),
            password_hash: Set(password_hash.as_str().to_string()),
            create_timestamp: Set(create_timestamp.fixed_offset()),
            deactivate_timestamp: Set(None),
        };
        iam_passwords::Entity::insert(credential)
            .exec(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
        Ok(id)
    }

    async fn find_latest_active(
        &self,
        principal_id: Uuid,
    ) -> Result<Option<Credential>, RepositoryError> {
        let model = iam_passwords::Entity::find()
            .filter(iam_passwords::Column::PrincipalId.eq(principal_id))
            .filter(iam_passwords::Column::DeactivateTimestamp.is_null())
            .order_by_desc(iam_passwords::Column::CreateTimestamp)
            .order_by_asc(iam_passwords::Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        match model {
            Some(model) => Ok(Some(Credential::reconstruct(
                model.id,
                model.principal_id,
                HashedPassword::new(model.password_hash),
                model.create_timestamp.naive_utc().and_utc(),
                model
                    .deactivate_timestamp
                    .map(|t| t.naive_utc().and_utc()),
            ))),
            None => Ok(None),
        }
    }

    async fn deactivate(
        &self,
        credential_id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        // The null filter keeps the transition one-way: an existing
        // deactivation timestamp is never overwritten.
        let result = iam_passwords::Entity::update_many()
            .col_expr(
                iam_passwords::Column::DeactivateTimestamp,
                Expr::value(at.fixed_offset()),
            )
            .filter(iam_passwords::Column::Id.eq(credential_id))
            .filter(iam_passwords::Column::DeactivateTimestamp.is_null())
            .exec(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
