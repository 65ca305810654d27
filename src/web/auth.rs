use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

use super::api::error::ErrorResponse;
use super::config::{Config, Permission};

/// Feed producer identified by a bearer API key.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub name: String,
    pub permissions: HashSet<Permission>,
}

impl AuthenticatedUser {
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    fn from_key(config: &Config, key: &str) -> Result<Self, AuthError> {
        let api_key = config.find_api_key(key).ok_or(AuthError::UnknownKey)?;
        Ok(AuthenticatedUser {
            name: api_key.name.clone(),
            permissions: api_key.permissions.clone(),
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing Authorization header")]
    MissingHeader,
    #[error("expected `Authorization: Bearer <key>`")]
    NotBearer,
    #[error("unknown API key")]
    UnknownKey,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::with_message("unauthorized", &self.to_string());
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
#[error("API key lacks the {0:?} permission")]
pub struct PermissionError(pub Permission);

impl IntoResponse for PermissionError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::with_message("forbidden", &self.to_string());
        (StatusCode::FORBIDDEN, Json(body)).into_response()
    }
}

fn bearer_key(parts: &Parts) -> Result<&str, AuthError> {
    let value = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingHeader)?;
    let value = value.to_str().map_err(|_| AuthError::NotBearer)?;
    match value.strip_prefix("Bearer ").map(str::trim) {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(AuthError::NotBearer),
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
    Arc<Config>: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = Arc::<Config>::from_ref(state);
        AuthenticatedUser::from_key(&config, bearer_key(parts)?)
    }
}

pub fn require_permission(
    user: &AuthenticatedUser,
    permission: Permission,
) -> Result<(), PermissionError> {
    if user.has_permission(permission) {
        Ok(())
    } else {
        Err(PermissionError(permission))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use indoc::indoc;

    fn config() -> Arc<Config> {
        Arc::new(
            Config::from_yaml(indoc! {"
                api_keys:
                  - key: secret
                    name: ingest-bot
                    permissions: [ingest_feed]
                  - key: readonly
                    name: dashboard
                    permissions: []
            "})
            .unwrap(),
        )
    }

    async fn authenticate(header: Option<&str>) -> Result<AuthenticatedUser, AuthError> {
        let mut request = Request::builder().uri("/api/feed");
        if let Some(value) = header {
            request = request.header(AUTHORIZATION, value);
        }
        let (mut parts, ()) = request.body(()).unwrap().into_parts();
        AuthenticatedUser::from_request_parts(&mut parts, &config()).await
    }

    #[tokio::test]
    async fn missing_header_is_rejected() {
        assert_eq!(authenticate(None).await.unwrap_err(), AuthError::MissingHeader);
    }

    #[tokio::test]
    async fn non_bearer_schemes_are_rejected() {
        for header in ["Basic c2VjcmV0", "secret", "Bearer ", "bearer secret"] {
            assert_eq!(
                authenticate(Some(header)).await.unwrap_err(),
                AuthError::NotBearer,
                "{header}"
            );
        }
    }

    #[tokio::test]
    async fn unknown_key_is_rejected() {
        assert_eq!(
            authenticate(Some("Bearer guess")).await.unwrap_err(),
            AuthError::UnknownKey
        );
    }

    #[tokio::test]
    async fn known_key_carries_its_permissions() {
        let user = authenticate(Some("Bearer secret")).await.unwrap();
        assert_eq!(user.name, "ingest-bot");
        assert!(require_permission(&user, Permission::IngestFeed).is_ok());

        let user = authenticate(Some("Bearer readonly")).await.unwrap();
        assert_eq!(user.name, "dashboard");
        assert!(require_permission(&user, Permission::IngestFeed).is_err());
    }

    #[test]
    fn rejections_map_to_status_codes() {
        assert_eq!(
            AuthError::UnknownKey.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            PermissionError(Permission::IngestFeed).into_response().status(),
            StatusCode::FORBIDDEN
        );
    }
}
