use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// What an account is allowed to do. Closed set: every `match` on it is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    /// Places orders.
    Client,
    /// Runs restaurants and cooks their orders.
    Owner,
    /// Picks up and delivers orders.
    Delivery,
}

/// A registered account.
///
/// Managed by the user store, see [`crate::user_actor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub role: UserRole,
    pub verified: bool,
    /// Pending email verification code. Kept out of every serialized output.
    #[serde(skip)]
    pub verification_code: Option<String>,
}

impl User {
    /// A new, unverified account with no code issued yet.
    pub fn new(id: UserId, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            id,
            email: email.into(),
            role,
            verified: false,
            verification_code: None,
        }
    }
}

/// Payload for creating a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub role: UserRole,
}

/// Payload for updating an existing user.
///
/// `verified: Some(true)` consumes the pending verification code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub verified: Option<bool>,
}
