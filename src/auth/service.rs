//! Core business logic for the authentication system.
//!
//! `AuthService` orchestrates the credential hasher, the token service and
//! the user store behind four operations: register, login, profile fetch
//! and profile update. Each is a pure request-to-result mapping with no
//! hidden state; the HTTP handlers only translate the results into
//! responses.

use uuid::Uuid;

use crate::auth::credentials::verify_password;
use crate::auth::handlers::types::{
    LoginRequest, RegisterRequest, UpdateProfileRequest, UserView,
};
use crate::auth::sessions::SessionService;
use crate::auth::users::{NewUser, UserPatch, UserStore, UserType};
use crate::error::AuthError;

/// Orchestrates registration, login and profile access.
#[derive(Clone)]
pub struct AuthService {
    store: UserStore,
    sessions: SessionService,
}

impl AuthService {
    pub fn new(store: UserStore, sessions: SessionService) -> Self {
        Self { store, sessions }
    }

    /// Register a new user and issue a token for the fresh account.
    ///
    /// The email must be unused; an unrecognized or absent `userType`
    /// silently becomes `student`. Field validation happens in the store.
    pub async fn register(
        &self,
        request: RegisterRequest,
    ) -> Result<(String, UserView), AuthError> {
        if self.store.find_by_email(&request.email).await?.is_some() {
            tracing::warn!("Registration with already-used email: {}", request.email);
            return Err(AuthError::DuplicateEmail);
        }

        let user_type = request
            .user_type
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(UserType::Student);

        let user = self
            .store
            .create(NewUser {
                name: request.name,
                email: request.email,
                password: request.password,
                college: request.college,
                course: request.course,
                year: request.year,
                user_type,
            })
            .await?;

        let token = self.sessions.issue(user.id)?;
        tracing::info!("User registered: {} ({})", user.name, user.email);

        Ok((token, UserView::from(user)))
    }

    /// Authenticate an email/password pair and issue a token.
    ///
    /// An unknown email and a wrong password fail identically, so callers
    /// cannot learn which emails are registered.
    pub async fn login(&self, request: LoginRequest) -> Result<(String, UserView), AuthError> {
        let user = self
            .store
            .find_by_email(&request.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(&request.password, &user.password_hash) {
            tracing::warn!("Failed login attempt for: {}", request.email);
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.sessions.issue(user.id)?;
        tracing::info!("User logged in: {} ({})", user.name, user.email);

        Ok((token, UserView::from(user)))
    }

    /// Load the public view of an authenticated user.
    ///
    /// Fails with `NotFound` if the identity no longer resolves, e.g. the
    /// account vanished after the token was issued.
    pub async fn profile(&self, user_id: Uuid) -> Result<UserView, AuthError> {
        let user = self
            .store
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::NotFound)?;

        Ok(UserView::from(user))
    }

    /// Apply a profile update for an authenticated user.
    ///
    /// Only name, college, course and year are updatable through this path.
    /// An empty string is treated like an absent field (value unchanged),
    /// matching the behavior the front end was built against; a field can
    /// therefore not be cleared once set.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<UserView, AuthError> {
        let patch = UserPatch {
            name: non_empty(request.name),
            college: non_empty(request.college),
            course: non_empty(request.course),
            year: non_empty(request.year),
            password: None,
        };

        let user = self.store.update(user_id, patch).await?;
        tracing::info!("Profile updated: {} ({})", user.name, user.email);

        Ok(UserView::from(user))
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn service() -> AuthService {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");
        sqlx::migrate!()
            .run(&pool)
            .await
            .expect("Failed to run migrations");
        AuthService::new(UserStore::new(pool), SessionService::new("service-test-secret"))
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Ada".to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
            college: None,
            course: None,
            year: None,
            user_type: None,
        }
    }

    #[tokio::test]
    async fn test_register_then_login_with_same_credentials() {
        let auth = service().await;

        let (token, user) = auth.register(register_request("ada@x.com")).await.unwrap();
        assert!(!token.is_empty());
        assert_eq!(user.email, "ada@x.com");
        assert_eq!(user.user_type, UserType::Student);

        let (login_token, login_user) = auth
            .login(LoginRequest {
                email: "ada@x.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();
        assert!(!login_token.is_empty());
        assert_eq!(login_user.id, user.id);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let auth = service().await;
        auth.register(register_request("dup@x.com")).await.unwrap();

        let result = auth.register(register_request("dup@x.com")).await;
        assert!(matches!(result, Err(AuthError::DuplicateEmail)));
    }

    #[tokio::test]
    async fn test_register_defaults_unrecognized_user_type() {
        let auth = service().await;

        let mut request = register_request("type@x.com");
        request.user_type = Some("wizard".to_string());
        let (_, user) = auth.register(request).await.unwrap();
        assert_eq!(user.user_type, UserType::Student);

        let mut request = register_request("educator@x.com");
        request.user_type = Some("educator".to_string());
        let (_, user) = auth.register(request).await.unwrap();
        assert_eq!(user.user_type, UserType::Educator);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let auth = service().await;
        auth.register(register_request("real@x.com")).await.unwrap();

        let unknown = auth
            .login(LoginRequest {
                email: "ghost@x.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap_err();
        let wrong_password = auth
            .login(LoginRequest {
                email: "real@x.com".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(unknown, AuthError::InvalidCredentials));
        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert_eq!(unknown.message(), wrong_password.message());
    }

    #[tokio::test]
    async fn test_issued_token_resolves_back_to_the_user() {
        let auth = service().await;
        let (token, user) = auth.register(register_request("round@x.com")).await.unwrap();

        let subject = auth.sessions.verify(&token).unwrap();
        assert_eq!(subject, user.id);
        assert_eq!(auth.profile(subject).await.unwrap().email, "round@x.com");
    }

    #[tokio::test]
    async fn test_profile_for_vanished_user_is_not_found() {
        let auth = service().await;
        let result = auth.profile(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AuthError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_profile_name_only_retains_other_fields() {
        let auth = service().await;
        let mut request = register_request("partial@x.com");
        request.college = Some("Hillcrest".to_string());
        request.course = Some("Chemistry".to_string());
        let (_, user) = auth.register(request).await.unwrap();

        let updated = auth
            .update_profile(
                user.id,
                UpdateProfileRequest {
                    name: Some("Ada Lovelace".to_string()),
                    ..UpdateProfileRequest::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Ada Lovelace");
        assert_eq!(updated.college.as_deref(), Some("Hillcrest"));
        assert_eq!(updated.course.as_deref(), Some("Chemistry"));

        // A subsequent profile fetch reflects the new name.
        assert_eq!(auth.profile(user.id).await.unwrap().name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_update_profile_treats_empty_string_as_absent() {
        let auth = service().await;
        let mut request = register_request("empty@x.com");
        request.college = Some("Hillcrest".to_string());
        let (_, user) = auth.register(request).await.unwrap();

        let updated = auth
            .update_profile(
                user.id,
                UpdateProfileRequest {
                    name: Some(String::new()),
                    college: Some(String::new()),
                    ..UpdateProfileRequest::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Ada");
        assert_eq!(updated.college.as_deref(), Some("Hillcrest"));
    }
}
