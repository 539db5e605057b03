//! Share-link handlers.

use actix_web::{HttpResponse, web};

use brain_shared::dto::{ContentResponse, ShareLinkResponse};

use super::content::content_response;
use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/share/link
pub async fn create_link(identity: Identity, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let link = state.share.create_link(identity.user_id).await?;

    Ok(HttpResponse::Created().json(ShareLinkResponse {
        message: "Shareable link generated successfully".to_string(),
        hash: link.hash,
    }))
}

/// GET /api/share/link/{hash} - public
pub async fn resolve_link(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let items = state.share.resolve(&path.into_inner()).await?;

    let body: Vec<ContentResponse> = items.into_iter().map(content_response).collect();
    Ok(HttpResponse::Ok().json(body))
}
