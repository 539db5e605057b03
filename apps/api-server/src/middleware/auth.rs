//! Authentication extractor.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header};
use std::future::{Ready, ready};
use std::sync::Arc;

use brain_core::ports::{AuthError, TokenService};
use brain_shared::ErrorResponse;

/// Authenticated caller, taken from a verified token.
///
/// Use this in handlers to require authentication:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, user {}!", identity.user_id)
/// }
/// ```
///
/// The id is trusted as signed; the users table is not consulted.
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    pub user_id: uuid::Uuid,
}

/// Error type for authentication failures.
#[derive(Debug)]
pub struct AuthenticationError(pub AuthError);

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match &self.0 {
            AuthError::MissingAuth | AuthError::InvalidToken(_) | AuthError::TokenExpired => {
                actix_web::http::StatusCode::UNAUTHORIZED
            }
            AuthError::Misconfigured | AuthError::HashingError(_) => {
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let message = match &self.0 {
            AuthError::MissingAuth => "No token, authorization denied",
            AuthError::InvalidToken(_) | AuthError::TokenExpired => "Invalid token",
            AuthError::Misconfigured => "Server error: Missing JWT secret",
            AuthError::HashingError(_) => "Internal server error",
        };

        actix_web::HttpResponse::build(self.status_code()).json(ErrorResponse::new(message))
    }
}

/// Token from an `Authorization` value: `Bearer <token>` or the bare token.
fn bearer_token(value: &str) -> &str {
    value.strip_prefix("Bearer ").unwrap_or(value).trim()
}

fn authenticate(req: &HttpRequest) -> Result<Identity, AuthError> {
    let auth_str = match req.headers().get(header::AUTHORIZATION) {
        Some(value) => value
            .to_str()
            .map_err(|_| AuthError::InvalidToken("Invalid authorization header".to_string()))?,
        None => return Err(AuthError::MissingAuth),
    };

    if auth_str.trim().is_empty() {
        return Err(AuthError::MissingAuth);
    }

    // Checked after presence so a bare request still gets a 401
    let token_service = req
        .app_data::<actix_web::web::Data<Arc<dyn TokenService>>>()
        .ok_or_else(|| {
            tracing::error!("TokenService not found in app data");
            AuthError::Misconfigured
        })?;

    let claims = token_service.validate_token(bearer_token(auth_str))?;
    Ok(Identity {
        user_id: claims.user_id,
    })
}

impl FromRequest for Identity {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = authenticate(req).map_err(|e| {
            tracing::debug!(error = %e, "Authentication rejected");
            AuthenticationError(e)
        });
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_prefix_is_optional() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), "abc.def.ghi");
        assert_eq!(bearer_token("abc.def.ghi"), "abc.def.ghi");
    }
}
