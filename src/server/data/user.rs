use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::{
    data::query::{self, AdvancedQuery, FieldKind, QueryField},
    error::AppError,
    model::{
        query::{Page, QueryParams},
        user::{CreateUserParams, UpdateUserParams, User},
    },
};

use entity::user::Column;

impl AdvancedQuery for entity::user::Entity {
    const FIELDS: &'static [QueryField<Column>] = &[
        QueryField { name: "id", column: Column::Id, kind: FieldKind::Integer },
        QueryField { name: "name", column: Column::Name, kind: FieldKind::Text },
        QueryField { name: "email", column: Column::Email, kind: FieldKind::Text },
        QueryField { name: "role", column: Column::Role, kind: FieldKind::Text },
        QueryField { name: "createdAt", column: Column::CreatedAt, kind: FieldKind::Text },
    ];

    const ID: Column = Column::Id;
}

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(DbErr)` - Database error, including a unique violation on `email`
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            role: ActiveValue::Set(params.role),
            password: ActiveValue::Set(params.password_hash),
            reset_password_token: ActiveValue::Set(None),
            reset_password_expire: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(user))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(user.map(User::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(user.map(User::from_entity))
    }

    /// Gets one page of accounts shaped by the advanced query parameters.
    pub async fn get_paginated(&self, params: &QueryParams) -> Result<Page<User>, AppError> {
        let page = query::fetch_page(self.db, entity::prelude::User::find(), params).await?;

        Ok(page.map(User::from_entity))
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated account
    /// - `Ok(None)` - No account with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = params.password_hash {
            active.password = ActiveValue::Set(password_hash);
        }
        if let Some(role) = params.role {
            active.role = ActiveValue::Set(role);
        }

        let user = active.update(self.db).await?;

        Ok(Some(User::from_entity(user)))
    }

    /// Deletes an account; owned bootcamps, courses and reviews cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Account deleted
    /// - `Ok(false)` - No account with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Stores the digest of an outstanding password reset token.
    pub async fn set_reset_token(
        &self,
        id: i32,
        token_digest: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            reset_password_token: ActiveValue::Set(Some(token_digest)),
            reset_password_expire: ActiveValue::Set(Some(expires_at)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Finds the account holding an unexpired reset token with this digest.
    pub async fn find_by_reset_token(
        &self,
        token_digest: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(Column::ResetPasswordToken.eq(token_digest))
            .filter(Column::ResetPasswordExpire.gt(now))
            .one(self.db)
            .await?;

        Ok(user.map(User::from_entity))
    }

    /// Replaces the password hash and clears any outstanding reset token.
    pub async fn reset_password(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            password: ActiveValue::Set(password_hash),
            reset_password_token: ActiveValue::Set(None),
            reset_password_expire: ActiveValue::Set(None),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }
}
