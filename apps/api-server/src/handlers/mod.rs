//! HTTP handlers and route configuration.

mod auth;
mod content;
mod health;
mod share;
mod user;

#[cfg(test)]
mod tests;

use actix_web::{error::JsonPayloadError, web};

use crate::middleware::error::AppError;

/// Unreadable JSON bodies get the same `{message}` shape as other errors.
fn json_error(err: JsonPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("Invalid request body: {err}")).into()
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .service(
            web::scope("/api")
                // Public routes
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/auth")
                        .route("/request-otp", web::post().to(auth::request_otp))
                        .route("/signup", web::post().to(auth::signup))
                        .route("/login", web::post().to(auth::login)),
                )
                // Bearer-protected except for resolving a share hash
                .service(
                    web::scope("/content")
                        .route("", web::post().to(content::create))
                        .route("", web::get().to(content::list))
                        .route("/type/{type}", web::get().to(content::list_by_type))
                        .route("/search", web::get().to(content::search))
                        .route("/{id}", web::put().to(content::update))
                        .route("/{id}", web::delete().to(content::delete)),
                )
                .service(
                    web::scope("/share")
                        .route("/link", web::post().to(share::create_link))
                        .route("/link/{hash}", web::get().to(share::resolve_link)),
                )
                .route("/user/{id}", web::get().to(user::get_user)),
        );
}
