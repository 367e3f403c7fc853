//! User service

use anyhow::anyhow;
use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{
    error::ServiceResult,
    models::{User, UserPayload},
    repositories::UserRepository,
};

/// User service
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<User>> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn get_by_id(&self, user_id: &str) -> ServiceResult<Option<User>> {
        Ok(self.repository.find_by_id(user_id).await?)
    }

    pub async fn get_by_email(&self, email: &str) -> ServiceResult<Option<User>> {
        Ok(self.repository.find_by_email(email).await?)
    }

    pub async fn get_by_phone(&self, phone: &str) -> ServiceResult<Option<User>> {
        Ok(self.repository.find_by_phone(phone).await?)
    }

    pub async fn get_by_username(&self, username: &str) -> ServiceResult<Option<User>> {
        Ok(self.repository.find_by_username(username).await?)
    }

    /// Save a user, overwriting any record with the same identifier
    ///
    /// A missing or blank identifier is replaced by a fresh UUID. A supplied
    /// password is stored as an Argon2 hash.
    pub async fn save(&self, payload: UserPayload) -> ServiceResult<User> {
        let user_id = payload
            .user_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let password_hash = payload.password.as_deref().map(hash_password).transpose()?;

        let user = User {
            user_id,
            username: payload.username,
            email: payload.email,
            phone: payload.phone,
            address: payload.address,
            role: payload.role,
            password_hash,
        };

        info!("Saving user: {}", user.user_id);
        Ok(self.repository.save(&user).await?)
    }

    /// Delete a user; refused with `Conflict` while other records reference it
    pub async fn delete(&self, user_id: &str) -> ServiceResult<bool> {
        Ok(self.repository.delete(user_id).await?)
    }
}

fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("Failed to hash password: {}", e))?;

    Ok(hash.to_string())
}
