//! Registration, login and self-service account management.

use chrono::{Duration, Utc};
use entity::user::Role;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, NewAccount, UpdateUserParams, User},
    service::{
        password::{digest_reset_token, generate_reset_token, hash_password, verify_password},
        token::TokenService,
    },
};

/// How long a password reset token stays valid.
const RESET_TOKEN_TTL_MINUTES: i64 = 10;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a `user` or `publisher` account and signs a token for it.
    ///
    /// # Returns
    /// - `Ok((User, String))` - The new account and its bearer token
    /// - `Err(AppError::BadRequest)` - The admin role was requested
    /// - `Err(AppError::DbErr)` - Email already registered, or other database error
    pub async fn register(&self, account: NewAccount) -> Result<(User, String), AppError> {
        if account.role == Role::Admin {
            return Err(AppError::BadRequest(
                "Registration is only open to the user and publisher roles".to_string(),
            ));
        }

        let password_hash = hash_password(&account.password)?;
        let user = UserRepository::new(self.db)
            .create(CreateUserParams {
                name: account.name,
                email: account.email,
                password_hash,
                role: account.role,
            })
            .await?;

        tracing::info!("Registered user {} as {}", user.id, user.role);

        let token = self.tokens.issue(&user)?;
        Ok((user, token))
    }

    /// Verifies credentials and signs a token.
    ///
    /// Unknown email and wrong password fail identically.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String), AppError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "Please provide an email and password".to_string(),
            ));
        }

        let Some(user) = UserRepository::new(self.db).find_by_email(email.trim()).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(&user)?;
        Ok((user, token))
    }

    /// Updates the caller's own name and email
    pub async fn update_details(
        &self,
        user: &User,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .update(
                user.id,
                UpdateUserParams {
                    name,
                    email,
                    ..Default::default()
                },
            )
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user.id).into())
    }

    /// Replaces the caller's password after checking the current one, and signs a new token
    pub async fn update_password(
        &self,
        user: &User,
        current_password: &str,
        new_password: &str,
    ) -> Result<(User, String), AppError> {
        if !verify_password(current_password, &user.password_hash) {
            return Err(AuthError::IncorrectPassword.into());
        }

        let password_hash = hash_password(new_password)?;
        let updated = UserRepository::new(self.db)
            .update(
                user.id,
                UpdateUserParams {
                    password_hash: Some(password_hash),
                    ..Default::default()
                },
            )
            .await?
            .ok_or(AuthError::UserNotInDatabase(user.id))?;

        let token = self.tokens.issue(&updated)?;
        Ok((updated, token))
    }

    /// Creates a password reset token for the account registered under `email`.
    ///
    /// Only the SHA-256 digest is stored; the returned plain token is what the reset
    /// link carries.
    ///
    /// # Returns
    /// - `Ok(String)` - Plain reset token, valid for ten minutes
    /// - `Err(AppError::NotFound)` - No account with that email
    pub async fn forgot_password(&self, email: &str) -> Result<String, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(email.trim()).await? else {
            return Err(AppError::NotFound("There is no user with that email".to_string()));
        };

        let (token, digest) = generate_reset_token();
        repo.set_reset_token(
            user.id,
            digest,
            Utc::now() + Duration::minutes(RESET_TOKEN_TTL_MINUTES),
        )
        .await?;

        Ok(token)
    }

    /// Sets a new password using an unexpired reset token, and signs a token.
    ///
    /// # Returns
    /// - `Ok((User, String))` - The account and a fresh bearer token
    /// - `Err(AuthError::InvalidResetToken)` - Token unknown or expired
    pub async fn reset_password(
        &self,
        reset_token: &str,
        new_password: &str,
    ) -> Result<(User, String), AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo
            .find_by_reset_token(&digest_reset_token(reset_token), Utc::now())
            .await?
        else {
            return Err(AuthError::InvalidResetToken.into());
        };

        repo.reset_password(user.id, hash_password(new_password)?)
            .await?;

        let token = self.tokens.issue(&user)?;
        Ok((user, token))
    }
}
