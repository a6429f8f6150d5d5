//! User operations.

use crate::error::{Result, StoreError};
use crate::models::{NewUser, User};
use crate::LeadStore;

impl LeadStore {
    /// Create a new user. Usernames are unique.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User> {
        let mut tables = self.tables().write().await;

        if tables
            .users
            .values()
            .any(|user| user.username == new_user.username)
        {
            return Err(StoreError::AlreadyExists {
                entity: "User",
                id: new_user.username,
            });
        }

        let id = tables.allocate_user_id();
        let user = User {
            id,
            username: new_user.username,
            password: new_user.password,
        };
        tables.users.insert(id, user.clone());

        Ok(user)
    }

    /// Get a user by ID.
    pub async fn get_user(&self, id: i64) -> Result<User> {
        self.tables()
            .read()
            .await
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                entity: "User",
                id: id.to_string(),
            })
    }

    /// Get a user by username.
    pub async fn get_user_by_username(&self, username: &str) -> Result<User> {
        self.tables()
            .read()
            .await
            .users
            .values()
            .find(|user| user.username == username)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                entity: "User",
                id: username.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_user_lookup() {
        let store = LeadStore::new();

        let user = store.create_user(new_user("sam")).await.unwrap();
        assert_eq!(user.id, 1);

        assert_eq!(store.get_user(1).await.unwrap().username, "sam");
        assert_eq!(store.get_user_by_username("sam").await.unwrap().id, 1);
        assert!(matches!(
            store.get_user_by_username("kim").await,
            Err(StoreError::NotFound { entity: "User", .. })
        ));
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let store = LeadStore::new();
        store.create_user(new_user("sam")).await.unwrap();

        let result = store.create_user(new_user("sam")).await;

        assert!(matches!(result, Err(StoreError::AlreadyExists { .. })));
        assert!(store.get_user(2).await.is_err());
    }
}
