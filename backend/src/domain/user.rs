//! User records.
//!
//! Users exist in the data model and the store but no HTTP route consumes
//! them; passwords are kept verbatim because nothing authenticates against
//! them.

use std::fmt;

/// Sequential user identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input for registering a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

/// Stored user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password: String,
}

impl User {
    /// Materialise a user with a store-assigned identifier.
    pub fn create(id: UserId, new_user: NewUser) -> Self {
        let NewUser { username, password } = new_user;
        Self {
            id,
            username,
            password,
        }
    }
}
