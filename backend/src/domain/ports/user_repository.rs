//! Port for user storage.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// The backing storage could not be accessed.
        Storage { message: String } => "user storage unavailable: {message}",
        /// No further identifiers can be allocated.
        IdsExhausted => "user identifier space exhausted",
    }
}

/// Port for user records.
///
/// Username uniqueness is not enforced; [`UserRepository::find_by_username`]
/// returns the earliest registered match.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a user under the next sequential identifier.
    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch the first user registered with `username`.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserRepositoryError>;
}
