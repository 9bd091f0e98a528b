//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::User;

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List every stored user, unfiltered, in repository order.
    ///
    /// Repository failures are returned as-is.
    async fn all_users(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn all_users(&self) -> AppResult<Vec<User>> {
        let mut users = Vec::new();
        users.extend(self.repo.find_all().await?);

        tracing::debug!(count = users.len(), "Listed users");
        Ok(users)
    }
}
