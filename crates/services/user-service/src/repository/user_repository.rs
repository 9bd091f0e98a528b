//! User repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use super::entities::user::Entity as UserEntity;
use common::{AppError, AppResult};
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored user, in the order the store yields them
    async fn find_all(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        // No ORDER BY: enumeration order belongs to the store
        let models = UserEntity::find()
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::entities::user::Model;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use uuid::Uuid;

    fn model(email: &str) -> Model {
        let now = Utc::now();
        Model {
            id: Uuid::new_v4(),
            email: email.to_string(),
            full_name: "Test User".to_string(),
            password_hash: "hashed".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_find_all_keeps_store_order() {
        let second = model("b@example.com");
        let first = model("a@example.com");

        // Deliberately not sorted by email
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![second.clone(), first.clone()]])
            .into_connection();

        let users = UserStore::new(Arc::new(db)).find_all().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0], User::from(second));
        assert_eq!(users[1], User::from(first));
    }

    #[tokio::test]
    async fn test_find_all_empty_table() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();

        let users = UserStore::new(Arc::new(db)).find_all().await.unwrap();

        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_find_all_surfaces_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let result = UserStore::new(Arc::new(db)).find_all().await;

        assert!(matches!(result, Err(AppError::Database(DbErr::Custom(_)))));
    }

    #[tokio::test]
    async fn test_store_built_from_shared_database_handle() {
        let stored = model("shared@example.com");
        let connection = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored.clone()]])
            .into_connection();
        let db = crate::infra::Database::from_connection(connection);

        let users = UserStore::new(db.clone().get_connection())
            .find_all()
            .await
            .unwrap();

        assert_eq!(users, vec![User::from(stored)]);
    }
}
