use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        query::{Page, QueryParams},
        user::{AccountChanges, CreateUserParams, NewAccount, UpdateUserParams, User},
    },
    service::password::hash_password,
};

/// Admin management of accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(&self, params: &QueryParams) -> Result<Page<User>, AppError> {
        UserRepository::new(self.db).get_paginated(params).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Creates an account with any role, hashing the supplied password
    pub async fn create(&self, account: NewAccount) -> Result<User, AppError> {
        let password_hash = hash_password(&account.password)?;

        let user = UserRepository::new(self.db)
            .create(CreateUserParams {
                name: account.name,
                email: account.email,
                password_hash,
                role: account.role,
            })
            .await?;

        Ok(user)
    }

    /// Applies admin edits; a new password is hashed before it is stored
    pub async fn update(&self, id: i32, changes: AccountChanges) -> Result<User, AppError> {
        let password_hash = changes
            .password
            .as_deref()
            .map(hash_password)
            .transpose()?;

        UserRepository::new(self.db)
            .update(
                id,
                UpdateUserParams {
                    name: changes.name,
                    email: changes.email,
                    password_hash,
                    role: changes.role,
                },
            )
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("User not found with id of {}", id))
}
