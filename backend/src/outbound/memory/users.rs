//! `UserRepository` implementation for [`MemoryStore`].

use async_trait::async_trait;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{NewUser, User, UserId};

use super::MemoryStore;

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let mut table = self.write_users()?;
        let id = table
            .allocate_id()
            .map(UserId::new)
            .ok_or_else(UserRepositoryError::ids_exhausted)?;
        let created = User::create(id, user);
        table.rows.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.read_users()?.rows.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserRepositoryError> {
        Ok(self
            .read_users()?
            .rows
            .values()
            .find(|user| user.username == username)
            .cloned())
    }
}
