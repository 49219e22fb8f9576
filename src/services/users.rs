//! Authentication and user management service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use validator::Validate;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{LoginRequest, LoginResponse, RegisterRequest, User, UserClaims},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
    config: AuthConfig,
}

impl UsersService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Register a new user
    pub async fn register(&self, request: RegisterRequest) -> AppResult<LoginResponse> {
        request.validate()?;

        if self
            .repository
            .users
            .username_exists(&request.username)
            .await?
        {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }

        let hash = self.hash_password(&request.password)?;
        let user = self
            .repository
            .users
            .create(
                &request.username,
                &hash,
                request.public_profile.unwrap_or(false),
            )
            .await?;

        self.token_response(user)
    }

    /// Authenticate a user by username and password
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let user = self
            .repository
            .users
            .get_by_username(&request.username)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid username or password".to_string()))?;

        if !self.verify_password(&user, &request.password)? {
            return Err(AppError::Authentication(
                "Invalid username or password".to_string(),
            ));
        }

        self.token_response(user)
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }

    /// Resolve the profile a caller may read statistics for.
    ///
    /// Owners always see their own profile; anyone else only sees it when
    /// it is public. A missing row and a private profile answer the same
    /// way so usernames cannot be probed.
    pub async fn resolve_target(
        &self,
        acting_username: Option<&str>,
        username: &str,
    ) -> AppResult<User> {
        let is_self = acting_username
            .map(|acting| acting.eq_ignore_ascii_case(username))
            .unwrap_or(false);

        self.repository
            .users
            .get_by_username(username)
            .await?
            .filter(|user| is_self || user.public_profile)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    fn token_response(&self, user: User) -> AppResult<LoginResponse> {
        let claims = UserClaims::new(&user, self.config.jwt_expiration_hours as i64);
        let token = claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        Ok(LoginResponse {
            token,
            token_type: "Bearer".to_string(),
            user,
        })
    }

    /// Verify user password
    fn verify_password(&self, user: &User, password: &str) -> AppResult<bool> {
        if let Some(ref hash) = user.password_hash {
            let parsed_hash = PasswordHash::new(hash)
                .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
            return Ok(Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok());
        }

        Ok(false)
    }

    /// Hash a password using Argon2
    fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }
}
