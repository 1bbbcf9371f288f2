//! Caller identity.
//!
//! Authentication happens in front of this service; the gateway forwards
//! the reader's id in the `x-user-id` header.

use axum::async_trait;
use axum::extract::FromRequestParts;
use http::request::Parts;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

use super::error::ApiError;

pub const USER_ID_HEADER: &str = "x-user-id";

/// The reader making the request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| UserId::new(s.trim()).ok())
            .ok_or_else(|| {
                ApiError(DomainError::new(
                    ErrorCode::Unauthorized,
                    "Authentication is required",
                ))
            })?;

        Ok(AuthenticatedUser { user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{Request, StatusCode};

    async fn extract(request: Request<()>) -> Result<AuthenticatedUser, ApiError> {
        let (mut parts, _) = request.into_parts();
        AuthenticatedUser::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn header_identifies_the_reader() {
        let request = Request::builder()
            .header(USER_ID_HEADER, "reader-1")
            .body(())
            .unwrap();

        let user = extract(request).await.unwrap();
        assert_eq!(user.user_id.as_str(), "reader-1");
    }

    #[tokio::test]
    async fn missing_or_blank_header_is_unauthorized() {
        let err = extract(Request::builder().body(()).unwrap()).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);

        let request = Request::builder()
            .header(USER_ID_HEADER, "   ")
            .body(())
            .unwrap();
        let err = extract(request).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }
}
