//! Signup and login handlers.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use brain_core::domain::User;
use brain_core::ports::TokenService;
use brain_core::services::SignupInput;
use brain_shared::MessageResponse;
use brain_shared::dto::{AuthResponse, LoginRequest, RequestOtpRequest, SignupRequest, UserResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

type Tokens = Option<web::Data<Arc<dyn TokenService>>>;

pub(crate) fn user_response(user: &User) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
        is_verified: user.is_verified,
        created_at: user.created_at,
        updated_at: user.updated_at,
    }
}

fn require_tokens(tokens: Tokens) -> AppResult<web::Data<Arc<dyn TokenService>>> {
    tokens.ok_or_else(|| AppError::Internal("JWT_SECRET is not configured".to_string()))
}

fn issue(tokens: &dyn TokenService, message: &str, user: &User) -> AppResult<AuthResponse> {
    let token = tokens
        .generate_token(user.id)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(AuthResponse {
        message: message.to_string(),
        token,
        user: user_response(user),
    })
}

/// POST /api/auth/request-otp
pub async fn request_otp(
    state: web::Data<AppState>,
    body: web::Json<RequestOtpRequest>,
) -> AppResult<HttpResponse> {
    state.accounts.request_otp(&body.email).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("OTP sent to email")))
}

/// POST /api/auth/signup
pub async fn signup(
    state: web::Data<AppState>,
    tokens: Tokens,
    body: web::Json<SignupRequest>,
) -> AppResult<HttpResponse> {
    // Checked up front so a misconfigured server never consumes a code
    let tokens = require_tokens(tokens)?;
    let req = body.into_inner();

    let user = state
        .accounts
        .signup(SignupInput {
            username: req.username,
            email: req.email,
            password: req.password,
            otp: req.otp,
        })
        .await?;

    Ok(HttpResponse::Created().json(issue(tokens.get_ref().as_ref(), "Signup successful", &user)?))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    tokens: Tokens,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let tokens = require_tokens(tokens)?;

    let user = state.accounts.login(&body.email, &body.password).await?;

    Ok(HttpResponse::Ok().json(issue(tokens.get_ref().as_ref(), "Login successful", &user)?))
}
