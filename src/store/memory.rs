use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use crate::error::StoreError;
use crate::store::{NewUser, User, UserStore, UserUpdate};

/// In-memory user store.
///
/// Backed by an `RwLock`ed map keyed by user id; email uniqueness is
/// enforced on create and on email-changing updates. Emails are compared
/// exactly as stored (case-sensitive), fixed at creation time.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn get_user_by_email(&self, email: &str) -> Option<User> {
        let users = self.users.read().unwrap();
        users.values().find(|u| u.email == email).cloned()
    }

    fn get_user(&self, id: Uuid) -> Option<User> {
        let users = self.users.read().unwrap();
        users.get(&id).cloned()
    }

    fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().unwrap();

        if users.values().any(|u| u.email == new_user.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: new_user.email,
            name: new_user.name,
            password_hash: new_user.password_hash,
            created_at: now,
            updated_at: now,
        };

        users.insert(user.id, user.clone());
        Ok(user)
    }

    fn update_user(&self, id: Uuid, update: UserUpdate) -> Result<User, StoreError> {
        let mut users = self.users.write().unwrap();

        if let Some(email) = &update.email {
            if users.values().any(|u| u.id != id && &u.email == email) {
                return Err(StoreError::DuplicateEmail);
            }
        }

        let user = users.get_mut(&id).ok_or(StoreError::NotFound)?;

        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(name) = update.name {
            user.name = name;
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }
}
