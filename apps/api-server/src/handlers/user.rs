//! User lookup.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use brain_shared::dto::PublicUserResponse;

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const USER_NOT_FOUND: &str = "User not found";

/// GET /api/user/{id}
///
/// Any authenticated caller may look up any user.
pub async fn get_user(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = Uuid::parse_str(&path).map_err(|_| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

    let user = state
        .users
        .find_by_id(id)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

    Ok(HttpResponse::Ok().json(PublicUserResponse {
        email: user.email,
        username: user.username,
        is_verified: user.is_verified,
    }))
}
