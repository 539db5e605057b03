use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use async_trait::async_trait;
use serde_json::{Value, json};

use brain_core::ports::{MailError, Mailer, TokenService};
use brain_infra::InMemoryCache;
use brain_infra::auth::{JwtConfig, JwtTokenService};

use super::configure_routes;
use crate::config::AppConfig;
use crate::observability::{REQUEST_ID_HEADER, RequestIdMiddleware};
use crate::state::{AppState, Repositories};

/// Keeps the last code sent to each address.
#[derive(Default)]
struct CapturingMailer {
    sent: Mutex<HashMap<String, String>>,
}

impl CapturingMailer {
    fn code_for(&self, email: &str) -> String {
        self.sent.lock().unwrap().get(email).cloned().unwrap()
    }
}

#[async_trait]
impl Mailer for CapturingMailer {
    async fn send_otp(&self, email: &str, code: &str) -> Result<(), MailError> {
        self.sent
            .lock()
            .unwrap()
            .insert(email.to_string(), code.to_string());
        Ok(())
    }
}

struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send_otp(&self, _email: &str, _code: &str) -> Result<(), MailError> {
        Err(MailError::Transport("relay down".into()))
    }
}

fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret".to_string(),
        expiration_hours: 24,
        issuer: "second-brain".to_string(),
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database: None,
        jwt: Some(jwt_config()),
        otp_ttl: None,
        #[cfg(feature = "redis")]
        redis: None,
        #[cfg(feature = "mail")]
        mail: None,
    }
}

fn test_state(mailer: Arc<dyn Mailer>) -> AppState {
    AppState::from_parts(
        Repositories::in_memory(),
        Arc::new(InMemoryCache::new()),
        mailer,
        &test_config(),
    )
}

fn token_service() -> Arc<dyn TokenService> {
    Arc::new(JwtTokenService::new(jwt_config()))
}

macro_rules! init_app {
    ($state:expr) => {
        init_app!($state, Some(token_service()))
    };
    ($state:expr, $tokens:expr) => {{
        let tokens: Option<Arc<dyn TokenService>> = $tokens;
        let app = App::new()
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new($state.clone()));
        let app = match tokens {
            Some(tokens) => app.app_data(web::Data::new(tokens)),
            None => app,
        };
        test::init_service(app.configure(configure_routes)).await
    }};
}

macro_rules! send {
    ($app:expr, $req:expr $(,)?) => {{
        let resp = test::call_service($app, $req.to_request()).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        let value: Value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, value)
    }};
}

fn authed(req: test::TestRequest, token: &str) -> test::TestRequest {
    req.insert_header(("Authorization", format!("Bearer {token}")))
}

/// Run request-otp and signup; yields the token and user id.
macro_rules! register {
    ($app:expr, $mailer:expr, $email:expr $(,)?) => {{
        let email: &str = $email;
        let (status, _) = send!(
            $app,
            test::TestRequest::post()
                .uri("/api/auth/request-otp")
                .set_json(json!({ "email": email }))
        );
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send!(
            $app,
            test::TestRequest::post().uri("/api/auth/signup").set_json(json!({
                "username": email.split('@').next().unwrap(),
                "email": email,
                "password": "correct horse",
                "otp": $mailer.code_for(email),
            }))
        );
        assert_eq!(status, StatusCode::CREATED);

        (
            body["token"].as_str().unwrap().to_string(),
            body["user"]["id"].as_str().unwrap().to_string(),
        )
    }};
}

macro_rules! create_content {
    ($app:expr, $token:expr, $payload:expr $(,)?) => {
        send!(
            $app,
            authed(test::TestRequest::post().uri("/api/content"), $token).set_json($payload)
        )
    };
}

#[actix_web::test]
async fn test_health_check() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer));

    let (status, body) = send!(&app, test::TestRequest::get().uri("/api/health"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn test_request_id_is_echoed() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer));

    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header((REQUEST_ID_HEADER, "trace-me"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.headers().get(REQUEST_ID_HEADER).unwrap(), "trace-me");
}

#[actix_web::test]
async fn test_signup_code_works_exactly_once() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer.clone()));

    let (status, body) = send!(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/request-otp")
            .set_json(json!({ "email": "u@example.com" })),
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "OTP sent to email");

    let signup = json!({
        "username": "u",
        "email": "u@example.com",
        "password": "pw",
        "otp": mailer.code_for("u@example.com"),
    });

    let (status, body) = send!(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(&signup),
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Signup successful");
    assert_eq!(body["user"]["isVerified"], true);
    assert!(body["user"].get("passwordHash").is_none());

    let (status, body) = send!(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(&signup),
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid OTP");
}

#[actix_web::test]
async fn test_signup_without_requested_code_is_invalid_otp() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer));

    let (status, body) = send!(
        &app,
        test::TestRequest::post().uri("/api/auth/signup").set_json(json!({
            "username": "n",
            "email": "never@example.com",
            "password": "pw",
            "otp": "000000",
        })),
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid OTP");
}

#[actix_web::test]
async fn test_signup_requires_all_fields() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer));

    let (status, body) = send!(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(json!({ "email": "x@example.com", "password": "pw" })),
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "All fields are required");
}

#[actix_web::test]
async fn test_request_otp_validation() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer.clone()));

    let (status, body) = send!(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/request-otp")
            .set_json(json!({})),
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email is required");

    register!(&app, &mailer, "taken@example.com");

    let (status, body) = send!(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/request-otp")
            .set_json(json!({ "email": "taken@example.com" })),
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email already registered");
}

#[actix_web::test]
async fn test_mail_failure_is_internal_error() {
    let app = init_app!(test_state(Arc::new(FailingMailer)));

    let (status, body) = send!(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/request-otp")
            .set_json(json!({ "email": "a@example.com" })),
    );

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error");
}

#[actix_web::test]
async fn test_login_messages() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer.clone()));
    register!(&app, &mailer, "l@example.com");

    let login = |email: &str, password: &str| {
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": email, "password": password }))
    };

    let (status, body) = send!(&app, login("l@example.com", "correct horse"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert!(body["token"].as_str().is_some());

    let (status, body) = send!(&app, login("l@example.com", "wrong"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid credentials");

    let (status, body) = send!(&app, login("nobody@example.com", "pw"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User not found");

    let (status, body) = send!(&app, login("", ""));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "All fields are required");
}

#[actix_web::test]
async fn test_auth_gate_messages() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer));

    let (status, body) = send!(&app, test::TestRequest::get().uri("/api/content"));
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "No token, authorization denied");

    let (status, body) = send!(
        &app,
        authed(test::TestRequest::get().uri("/api/content"), "not-a-jwt"),
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid token");
}

#[actix_web::test]
async fn test_bare_token_is_accepted() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer.clone()));
    let (token, _) = register!(&app, &mailer, "bare@example.com");

    let (status, body) = send!(
        &app,
        test::TestRequest::get()
            .uri("/api/content")
            .insert_header(("Authorization", token)),
    );

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_missing_secret_is_server_error_after_presence_check() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer), None);

    let (status, body) = send!(&app, test::TestRequest::get().uri("/api/content"));
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "No token, authorization denied");

    let (status, body) = send!(
        &app,
        authed(test::TestRequest::get().uri("/api/content"), "anything"),
    );
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Server error: Missing JWT secret");
}

#[actix_web::test]
async fn test_duplicate_tag_titles_resolve_to_one_tag() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer.clone()));
    let (token, _) = register!(&app, &mailer, "t@example.com");

    let (status, first) = create_content!(
        &app,
        &token,
        json!({ "title": "Tagged", "type": "Notes", "tags": [{ "title": "a" }, { "title": "a" }] }),
    );
    assert_eq!(status, StatusCode::CREATED);
    let tags = first["tags"].as_array().unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0]["title"], "a");
    assert_eq!(tags[0]["color"], "#000000");

    // A later item reuses the same tag
    let (_, second) = create_content!(
        &app,
        &token,
        json!({ "title": "Again", "type": "Notes", "tags": ["a"] }),
    );
    assert_eq!(second["tags"][0]["id"], tags[0]["id"]);
}

#[actix_web::test]
async fn test_empty_tag_title_is_rejected() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer.clone()));
    let (token, _) = register!(&app, &mailer, "e@example.com");

    let (status, body) = create_content!(
        &app,
        &token,
        json!({ "title": "T", "type": "video", "tags": [{ "title": "" }] }),
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Tag title is required");
}

#[actix_web::test]
async fn test_other_user_cannot_update_or_delete() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer.clone()));
    let (owner, _) = register!(&app, &mailer, "owner@example.com");
    let (intruder, _) = register!(&app, &mailer, "intruder@example.com");

    let (_, created) = create_content!(&app, &owner, json!({ "title": "Mine", "type": "document" }));
    let uri = format!("/api/content/{}", created["id"].as_str().unwrap());

    let (status, body) = send!(
        &app,
        authed(test::TestRequest::put().uri(&uri), &intruder).set_json(json!({ "title": "Yours" })),
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Content not found");

    let (status, _) = send!(&app, authed(test::TestRequest::delete().uri(&uri), &intruder));
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listed) = send!(&app, authed(test::TestRequest::get().uri("/api/content"), &owner));
    assert_eq!(listed[0]["title"], "Mine");
}

#[actix_web::test]
async fn test_video_round_trip_by_type() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer.clone()));
    let (token, user_id) = register!(&app, &mailer, "v@example.com");

    create_content!(&app, &token, json!({ "title": "T", "type": "video" }));
    create_content!(&app, &token, json!({ "title": "Other", "type": "socialPost" }));

    let (status, body) = send!(
        &app,
        authed(test::TestRequest::get().uri("/api/content/type/video"), &token),
    );

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "T");
    assert_eq!(items[0]["type"], "video");
    assert_eq!(items[0]["userId"], user_id);
}

#[actix_web::test]
async fn test_invalid_type_filter_rejected() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer.clone()));
    let (token, _) = register!(&app, &mailer, "f@example.com");

    let (status, body) = send!(
        &app,
        authed(test::TestRequest::get().uri("/api/content/type/podcast"), &token),
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid content type");
}

#[actix_web::test]
async fn test_create_without_title_persists_nothing() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer.clone()));
    let (token, _) = register!(&app, &mailer, "c@example.com");

    let (status, body) = create_content!(&app, &token, json!({ "type": "video" }));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Title and type are required");

    let (status, body) = create_content!(&app, &token, json!({ "title": "T", "type": "Video" }));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid content type");

    let (_, listed) = send!(&app, authed(test::TestRequest::get().uri("/api/content"), &token));
    assert_eq!(listed, json!([]));
}

#[actix_web::test]
async fn test_partial_update_keeps_omitted_fields() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer.clone()));
    let (token, _) = register!(&app, &mailer, "p@example.com");

    let (_, created) = create_content!(
        &app,
        &token,
        json!({ "title": "Old", "type": "video", "link": "https://example.com", "tags": ["keep"] }),
    );
    let uri = format!("/api/content/{}", created["id"].as_str().unwrap());

    let (status, updated) = send!(
        &app,
        authed(test::TestRequest::put().uri(&uri), &token).set_json(json!({ "title": "New" })),
    );

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "New");
    assert_eq!(updated["type"], "video");
    assert_eq!(updated["link"], "https://example.com");
    assert_eq!(updated["tags"][0]["title"], "keep");
}

#[actix_web::test]
async fn test_update_replaces_tags_and_overwrites_empty_string() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer.clone()));
    let (token, _) = register!(&app, &mailer, "r@example.com");

    let (_, created) = create_content!(
        &app,
        &token,
        json!({
            "title": "Talk",
            "type": "video",
            "description": "kept",
            "link": "https://x",
            "tags": ["a", "b"],
        }),
    );
    let uri = format!("/api/content/{}", created["id"].as_str().unwrap());

    let (status, updated) = send!(
        &app,
        authed(test::TestRequest::put().uri(&uri), &token)
            .set_json(json!({ "tags": ["c"], "link": "", "description": null })),
    );

    assert_eq!(status, StatusCode::OK);
    let tags: Vec<&str> = updated["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(tags, vec!["c"]);
    assert_eq!(updated["link"], "");
    assert_eq!(updated["description"], "kept");
    assert_eq!(updated["title"], "Talk");
}

#[actix_web::test]
async fn test_update_rejects_invalid_type() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer.clone()));
    let (token, _) = register!(&app, &mailer, "it@example.com");

    let (_, created) = create_content!(&app, &token, json!({ "title": "Clip", "type": "video" }));
    let uri = format!("/api/content/{}", created["id"].as_str().unwrap());

    let (status, body) = send!(
        &app,
        authed(test::TestRequest::put().uri(&uri), &token).set_json(json!({ "type": "podcast" })),
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid content type");

    let (_, listed) = send!(&app, authed(test::TestRequest::get().uri("/api/content"), &token));
    assert_eq!(listed[0]["type"], "video");
}

#[actix_web::test]
async fn test_delete_then_missing() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer.clone()));
    let (token, _) = register!(&app, &mailer, "d@example.com");

    let (_, created) = create_content!(&app, &token, json!({ "title": "Gone", "type": "Notes" }));
    let uri = format!("/api/content/{}", created["id"].as_str().unwrap());

    let (status, body) = send!(&app, authed(test::TestRequest::delete().uri(&uri), &token));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Content deleted successfully");

    let (status, _) = send!(&app, authed(test::TestRequest::delete().uri(&uri), &token));
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send!(
        &app,
        authed(test::TestRequest::delete().uri("/api/content/not-a-uuid"), &token),
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_search_by_title_or_tag() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer.clone()));
    let (token, _) = register!(&app, &mailer, "s@example.com");

    create_content!(&app, &token, json!({ "title": "Learning RUST", "type": "video" }));
    create_content!(
        &app,
        &token,
        json!({ "title": "Borrowing", "type": "Notes", "tags": ["rustlang"] }),
    );
    create_content!(&app, &token, json!({ "title": "Bread", "type": "Notes" }));

    let (status, body) = send!(
        &app,
        authed(test::TestRequest::get().uri("/api/content/search?query=rust"), &token),
    );
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Learning RUST", "Borrowing"]);

    let (status, body) = send!(
        &app,
        authed(test::TestRequest::get().uri("/api/content/search"), &token),
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Search query is required");
}

#[actix_web::test]
async fn test_search_ignores_other_users_tags() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer.clone()));
    let (mine, _) = register!(&app, &mailer, "mine@example.com");
    let (theirs, _) = register!(&app, &mailer, "theirs@example.com");

    create_content!(&app, &mine, json!({ "title": "Plain", "type": "Notes", "tags": ["secret"] }));
    create_content!(&app, &mine, json!({ "title": "Untagged", "type": "Notes" }));
    create_content!(
        &app,
        &theirs,
        json!({ "title": "Hidden", "type": "Notes", "tags": ["secret"] }),
    );

    let (status, body) = send!(
        &app,
        authed(test::TestRequest::get().uri("/api/content/search?query=SEC"), &mine),
    );
    assert_eq!(status, StatusCode::OK);
    let found = body.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["title"], "Plain");
}

#[actix_web::test]
async fn test_whitespace_query_is_searched() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer.clone()));
    let (token, _) = register!(&app, &mailer, "ws@example.com");

    create_content!(&app, &token, json!({ "title": "Two words", "type": "Notes" }));
    create_content!(&app, &token, json!({ "title": "Oneword", "type": "Notes" }));

    let (status, body) = send!(
        &app,
        authed(test::TestRequest::get().uri("/api/content/search?query=%20"), &token),
    );
    assert_eq!(status, StatusCode::OK);
    let found = body.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["title"], "Two words");
}

#[actix_web::test]
async fn test_share_link_exposes_owner_content_publicly() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer.clone()));
    let (token, _) = register!(&app, &mailer, "share@example.com");

    create_content!(&app, &token, json!({ "title": "One", "type": "video" }));
    create_content!(&app, &token, json!({ "title": "Two", "type": "document" }));

    let (status, body) = send!(&app, authed(test::TestRequest::post().uri("/api/share/link"), &token));
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Shareable link generated successfully");
    let hash = body["hash"].as_str().unwrap().to_string();
    assert_eq!(hash.len(), 12);

    let (status, body) = send!(
        &app,
        test::TestRequest::get().uri(&format!("/api/share/link/{hash}")),
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = send!(&app, test::TestRequest::get().uri("/api/share/link/ZZZZZZ"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Link not found");
}

#[actix_web::test]
async fn test_user_lookup() {
    let mailer = Arc::new(CapturingMailer::default());
    let app = init_app!(test_state(mailer.clone()));
    let (token, user_id) = register!(&app, &mailer, "who@example.com");

    let (status, body) = send!(
        &app,
        authed(test::TestRequest::get().uri(&format!("/api/user/{user_id}")), &token),
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "email": "who@example.com", "username": "who", "isVerified": true }));

    let missing = uuid::Uuid::new_v4();
    let (status, body) = send!(
        &app,
        authed(test::TestRequest::get().uri(&format!("/api/user/{missing}")), &token),
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
}
