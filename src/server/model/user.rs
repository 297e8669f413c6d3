//! User domain models and parameters.

use chrono::{DateTime, Utc};
use entity::user::Role;

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::error::auth::AuthError,
};

/// An account as seen by services. Carries the password hash so login can verify it.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role: entity.role,
            password_hash: entity.password,
            created_at: entity.created_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Allows the owner of a resource, or any admin, to modify it.
    ///
    /// # Arguments
    /// - `owner_id` - Id of the user who owns the resource
    /// - `action` - Description used in the error, e.g. `"update bootcamp 3"`
    ///
    /// # Returns
    /// - `Ok(())` - User may modify the resource
    /// - `Err(AuthError::NotOwner)` - User is neither owner nor admin
    pub fn ensure_can_modify(&self, owner_id: i32, action: impl Into<String>) -> Result<(), AuthError> {
        if self.id == owner_id || self.is_admin() {
            return Ok(());
        }

        Err(AuthError::NotOwner {
            user_id: self.id,
            action: action.into(),
        })
    }

    /// Converts to the public DTO, dropping the password hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// Parameters for inserting an account. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Plain-text account fields accepted by registration and the admin API.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl NewAccount {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            role: dto.role.unwrap_or_default(),
        }
    }
}

/// Partial update of an account. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<Role>,
}

/// Admin edits before the new password, if any, is hashed.
#[derive(Debug, Clone, Default)]
pub struct AccountChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

impl AccountChanges {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            role: dto.role,
        }
    }
}
