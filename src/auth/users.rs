/**
 * User Model and Store
 *
 * This module defines the user record and the store that owns all access
 * to the `users` table. The store is constructed once at startup and
 * injected through application state; nothing in the crate holds a global
 * connection.
 *
 * # Contract
 *
 * - Field validation happens at the store boundary, before anything is
 *   persisted, collecting one message per violated rule
 * - Passwords are hashed as an explicit step inside `create` and `update`;
 *   a plaintext password never reaches the database
 * - Email uniqueness is enforced by the table's UNIQUE constraint, which is
 *   the sole serialization point for concurrent registrations
 * - Emails are stored and compared exactly as given (case-sensitive)
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::auth::credentials::hash_password;
use crate::error::AuthError;

/// Avatar reference assigned to every new account.
pub const DEFAULT_AVATAR: &str = "default-avatar.png";

/// Account type tag. A flat classification, not a permissions system.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Student,
    Educator,
    Admin,
}

impl std::str::FromStr for UserType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Self::Student),
            "educator" => Ok(Self::Educator),
            "admin" => Ok(Self::Admin),
            _ => Err(()),
        }
    }
}

/// User struct representing a row in the `users` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID), assigned at creation and immutable
    pub id: Uuid,
    /// Display name (2-50 chars)
    pub name: String,
    /// Email address (unique, case-sensitive)
    pub email: String,
    /// Hashed password (bcrypt); never the plaintext
    pub password_hash: String,
    /// College (optional free text)
    pub college: Option<String>,
    /// Course (optional free text)
    pub course: Option<String>,
    /// Year of study (optional free text)
    pub year: Option<String>,
    /// Account type tag
    pub user_type: UserType,
    /// Avatar image reference
    pub avatar: String,
    /// Whether the email address has been verified
    pub is_verified: bool,
    /// Created at timestamp (set by the store)
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp (set by the store)
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a user. The password is still plaintext here;
/// `UserStore::create` hashes it after validation.
#[derive(Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub college: Option<String>,
    pub course: Option<String>,
    pub year: Option<String>,
    pub user_type: UserType,
}

/// Partial update of a user record. Fields left as `None` retain their
/// previous value. Email, user type and id are not updatable.
#[derive(Debug, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub college: Option<String>,
    pub course: Option<String>,
    pub year: Option<String>,
    /// When present, re-validated and re-hashed before persisting.
    pub password: Option<String>,
}

/// Store for user records, wrapping the SQLite connection pool.
#[derive(Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    /// Create a store over an already-connected pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get user by email (exact, case-sensitive match)
    ///
    /// # Returns
    ///
    /// User or None if not found; absence is not an error.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, college, course, year,
                   user_type, avatar, is_verified, created_at, updated_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Get user by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, college, course, year,
                   user_type, avatar, is_verified, created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Create a new user
    ///
    /// Validates name, email and password, hashes the password, then runs a
    /// single atomic INSERT: either the record exists afterwards with all
    /// fields set, or it does not exist at all.
    ///
    /// # Errors
    ///
    /// * `Validation` - one message per violated field rule
    /// * `DuplicateEmail` - the UNIQUE constraint on email fired
    pub async fn create(&self, new_user: NewUser) -> Result<User, AuthError> {
        let messages = validate_new_user(&new_user);
        if !messages.is_empty() {
            return Err(AuthError::Validation(messages));
        }

        let password_hash = hash_password(&new_user.password)?;
        let id = Uuid::new_v4();
        let now = Utc::now();

        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password_hash, college, course, year,
                               user_type, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, name, email, password_hash, college, course, year,
                      user_type, avatar, is_verified, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&password_hash)
        .bind(&new_user.college)
        .bind(&new_user.course)
        .bind(&new_user.year)
        .bind(new_user.user_type)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(AuthError::DuplicateEmail)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Apply a partial update to a user record
    ///
    /// Unspecified fields retain their prior value. A changed name is
    /// re-validated; a changed password is re-validated and re-hashed
    /// before persisting. Bumps `updated_at`.
    ///
    /// # Errors
    ///
    /// * `NotFound` - the id does not resolve to a user
    /// * `Validation` - a changed field violated its rule
    pub async fn update(&self, id: Uuid, patch: UserPatch) -> Result<User, AuthError> {
        let current = self.find_by_id(id).await?.ok_or(AuthError::NotFound)?;

        let mut messages = Vec::new();
        if let Some(name) = &patch.name {
            validate_name(name, &mut messages);
        }
        if let Some(password) = &patch.password {
            validate_password(password, &mut messages);
        }
        if !messages.is_empty() {
            return Err(AuthError::Validation(messages));
        }

        let password_hash = match &patch.password {
            Some(password) => hash_password(password)?,
            None => current.password_hash,
        };
        let now = Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = ?, college = ?, course = ?, year = ?,
                password_hash = ?, updated_at = ?
            WHERE id = ?
            RETURNING id, name, email, password_hash, college, course, year,
                      user_type, avatar, is_verified, created_at, updated_at
            "#,
        )
        .bind(patch.name.unwrap_or(current.name))
        .bind(patch.college.or(current.college))
        .bind(patch.course.or(current.course))
        .bind(patch.year.or(current.year))
        .bind(&password_hash)
        .bind(now)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}

fn validate_new_user(new_user: &NewUser) -> Vec<String> {
    let mut messages = Vec::new();
    validate_name(&new_user.name, &mut messages);
    validate_email(&new_user.email, &mut messages);
    validate_password(&new_user.password, &mut messages);
    messages
}

fn validate_name(name: &str, messages: &mut Vec<String>) {
    if name.is_empty() {
        messages.push("Name cannot be empty".to_string());
    } else if name.chars().count() < 2 || name.chars().count() > 50 {
        messages.push("Name must be between 2 and 50 characters".to_string());
    }
}

fn validate_email(email: &str, messages: &mut Vec<String>) {
    if email.is_empty() {
        messages.push("Email cannot be empty".to_string());
    } else if !is_valid_email(email) {
        messages.push("Please enter a valid email address".to_string());
    }
}

fn validate_password(password: &str, messages: &mut Vec<String>) {
    if password.is_empty() {
        messages.push("Password cannot be empty".to_string());
    } else if password.chars().count() < 6 {
        messages.push("Password must be at least 6 characters".to_string());
    }
}

/// Basic structural email check: one '@', a non-empty local part, a domain
/// with a dot, no whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@')
}
