//! Content handlers. Every route here requires an [`Identity`].

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use brain_core::domain::ContentDetails;
use brain_core::services::{ContentPatch, NewContent, TagInput};
use brain_shared::MessageResponse;
use brain_shared::dto::{
    ContentResponse, CreateContentRequest, TagRequest, TagResponse, UpdateContentRequest,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const CONTENT_NOT_FOUND: &str = "Content not found";

pub(crate) fn content_response(details: ContentDetails) -> ContentResponse {
    let ContentDetails { content, tags } = details;

    ContentResponse {
        id: content.id,
        title: content.title,
        description: content.description,
        content_type: content.content_type.to_string(),
        link: content.link,
        image: content.image,
        tags: tags
            .into_iter()
            .map(|t| TagResponse {
                id: t.id,
                title: t.title,
                color: t.color,
            })
            .collect(),
        user_id: content.user_id,
        created_at: content.created_at,
        updated_at: content.updated_at,
    }
}

fn list_response(items: Vec<ContentDetails>) -> HttpResponse {
    let body: Vec<ContentResponse> = items.into_iter().map(content_response).collect();
    HttpResponse::Ok().json(body)
}

fn tag_inputs(tags: Option<Vec<TagRequest>>) -> Option<Vec<TagInput>> {
    tags.map(|tags| {
        tags.into_iter()
            .map(|t| TagInput {
                title: t.title().to_string(),
                color: t.color().map(str::to_string),
            })
            .collect()
    })
}

/// A malformed id cannot name an existing item.
fn content_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(CONTENT_NOT_FOUND.to_string()))
}

/// POST /api/content
pub async fn create(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<CreateContentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let input = NewContent {
        title: req.title,
        content_type: req.content_type,
        description: req.description,
        link: req.link,
        image: req.image,
        tags: tag_inputs(req.tags),
    };

    let created = state.content.create(identity.user_id, input).await?;
    Ok(HttpResponse::Created().json(content_response(created)))
}

/// GET /api/content
pub async fn list(identity: Identity, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(list_response(state.content.list(identity.user_id).await?))
}

/// GET /api/content/type/{type}
pub async fn list_by_type(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let items = state
        .content
        .list_by_type(identity.user_id, &path.into_inner())
        .await?;
    Ok(list_response(items))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

/// GET /api/content/search?query=
pub async fn search(
    identity: Identity,
    state: web::Data<AppState>,
    params: web::Query<SearchParams>,
) -> AppResult<HttpResponse> {
    let items = state.content.search(identity.user_id, &params.query).await?;
    Ok(list_response(items))
}

/// PUT /api/content/{id}
pub async fn update(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateContentRequest>,
) -> AppResult<HttpResponse> {
    let id = content_id(&path)?;
    let req = body.into_inner();
    let patch = ContentPatch {
        title: req.title,
        content_type: req.content_type,
        description: req.description,
        link: req.link,
        image: req.image,
        tags: tag_inputs(req.tags),
    };

    let updated = state.content.update(identity.user_id, id, patch).await?;
    Ok(HttpResponse::Ok().json(content_response(updated)))
}

/// DELETE /api/content/{id}
pub async fn delete(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = content_id(&path)?;
    state.content.delete(identity.user_id, id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Content deleted successfully")))
}
