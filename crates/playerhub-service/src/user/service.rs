//! User registration, lookup, update and deletion.

use std::sync::Arc;

use tracing::info;

use playerhub_auth::PasswordHasher;
use playerhub_core::error::AppError;
use playerhub_core::result::AppResult;
use playerhub_core::traits::Repository;
use playerhub_core::types::UserId;
use playerhub_database::UserRepository;
use playerhub_entity::user::{CreateUser, UpdateUser, User, UserRole};

/// Data for registering a new account.
#[derive(Debug, Clone)]
pub struct RegisterUser {
    /// Desired username.
    pub username: String,
    /// Email address; the login identifier.
    pub email: String,
    /// Plaintext password, hashed before storage.
    pub password: String,
    /// Age in years.
    pub age: i32,
}

/// Partial update of an account. Absent fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    /// New username.
    pub username: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New age.
    pub age: Option<i32>,
}

/// Handles user accounts.
#[derive(Clone)]
pub struct UserService {
    /// User repository.
    users: Arc<dyn UserRepository>,
    /// Password hasher.
    hasher: Arc<dyn PasswordHasher>,
    /// Role given to self-registered accounts.
    default_role: UserRole,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService")
            .field("default_role", &self.default_role)
            .finish_non_exhaustive()
    }
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        default_role: UserRole,
    ) -> Self {
        Self {
            users,
            hasher,
            default_role,
        }
    }

    /// Registers a new account with the configured default role.
    pub async fn register(&self, req: RegisterUser) -> AppResult<User> {
        self.create_with_role(req, self.default_role).await
    }

    /// Creates an account with an explicit role.
    ///
    /// Used to provision administrators; never reachable from public
    /// registration.
    pub async fn create_with_role(&self, req: RegisterUser, role: UserRole) -> AppResult<User> {
        let username = req.username.trim().to_string();
        let email = req.email.trim().to_string();
        self.ensure_unique(&username, &email, None).await?;

        let password_hash = self.hasher.hash(&req.password)?;
        let user = self
            .users
            .create(&CreateUser {
                username,
                email,
                password_hash,
                age: req.age,
                role,
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, "User registered");
        Ok(user)
    }

    /// Gets a user by ID.
    pub async fn get(&self, id: UserId) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Lists every user.
    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.users.find_all().await
    }

    /// Applies a partial update to a user.
    pub async fn update(&self, id: UserId, req: UpdateUserRequest) -> AppResult<User> {
        let current = self.get(id).await?;

        let changes = UpdateUser {
            username: req
                .username
                .map(|u| u.trim().to_string())
                .unwrap_or(current.username),
            email: req
                .email
                .map(|e| e.trim().to_string())
                .unwrap_or(current.email),
            age: req.age.unwrap_or(current.age),
        };
        self.ensure_unique(&changes.username, &changes.email, Some(id))
            .await?;

        let user = self
            .users
            .update(id, &changes)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(user_id = %id, "User updated");
        Ok(user)
    }

    /// Deletes a user along with the profiles it owns.
    pub async fn delete(&self, id: UserId) -> AppResult<()> {
        if !self.users.delete(id).await? {
            return Err(AppError::not_found("User not found"));
        }
        info!(user_id = %id, "User deleted");
        Ok(())
    }

    async fn ensure_unique(
        &self,
        username: &str,
        email: &str,
        except: Option<UserId>,
    ) -> AppResult<()> {
        if let Some(existing) = self.users.find_by_email(email).await? {
            if Some(existing.id) != except {
                return Err(AppError::conflict("Email already in use"));
            }
        }
        if let Some(existing) = self.users.find_by_username(username).await? {
            if Some(existing.id) != except {
                return Err(AppError::conflict("Username already exists"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playerhub_auth::Argon2PasswordHasher;
    use playerhub_core::error::ErrorKind;
    use playerhub_database::MemoryStore;

    fn service() -> UserService {
        UserService::new(
            Arc::new(MemoryStore::new()),
            Arc::new(Argon2PasswordHasher::new()),
            UserRole::User,
        )
    }

    fn registration(username: &str, email: &str) -> RegisterUser {
        RegisterUser {
            username: username.into(),
            email: email.into(),
            password: "s3cret-pass".into(),
            age: 21,
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password_and_assigns_default_role() {
        let svc = service();
        let user = svc
            .register(registration("alice", "alice@example.com"))
            .await
            .unwrap();

        assert_eq!(user.role, UserRole::User);
        assert_ne!(user.password_hash, "s3cret-pass");
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let svc = service();
        svc.register(registration("alice", "alice@example.com"))
            .await
            .unwrap();

        let err = svc
            .register(registration("alice2", "alice@example.com"))
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::Conflict));
    }

    #[tokio::test]
    async fn test_partial_update_keeps_unset_fields() {
        let svc = service();
        let user = svc
            .register(registration("alice", "alice@example.com"))
            .await
            .unwrap();

        let updated = svc
            .update(
                user.id,
                UpdateUserRequest {
                    age: Some(30),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.age, 30);
        assert_eq!(updated.username, "alice");
        assert_eq!(updated.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_update_to_taken_username_conflicts() {
        let svc = service();
        svc.register(registration("alice", "alice@example.com"))
            .await
            .unwrap();
        let bob = svc
            .register(registration("bob", "bob@example.com"))
            .await
            .unwrap();

        let err = svc
            .update(
                bob.id,
                UpdateUserRequest {
                    username: Some("alice".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::Conflict));
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_not_found() {
        let err = service().delete(UserId::new(404)).await.unwrap_err();
        assert!(err.is(ErrorKind::NotFound));
    }
}
