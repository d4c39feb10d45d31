/// User persistence
///
/// The persistence store is a collaborator behind the `UserStore` trait;
/// handlers depend only on the trait so a database-backed implementation
/// can slot in without touching the auth core. The shipped implementation
/// is in-memory.

mod memory;

pub use memory::InMemoryUserStore;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::StoreError;

/// A stored user account.
///
/// `password_hash` is the opaque output of the credential verifier; the
/// plaintext never reaches the store, and responses never expose the
/// hash.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

/// Partial profile update. `password_hash` is deliberately absent: a
/// password change would go through its own path, not profile update.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub name: Option<String>,
}

pub trait UserStore: Send + Sync {
    fn get_user_by_email(&self, email: &str) -> Option<User>;
    fn get_user(&self, id: Uuid) -> Option<User>;
    fn create_user(&self, new_user: NewUser) -> Result<User, StoreError>;
    fn update_user(&self, id: Uuid, update: UserUpdate) -> Result<User, StoreError>;
}
