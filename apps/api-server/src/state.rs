//! Application state - shared across all handlers.

use std::sync::Arc;

use brain_core::ports::{
    Cache, CacheError, ContentRepository, Mailer, ShareLinkRepository, TagRepository, TokenService,
    UserRepository,
};
use brain_core::services::{AccountService, ContentService, OtpStore, ShareService};
use brain_infra::auth::{Argon2PasswordService, JwtTokenService};
use brain_infra::cache::InMemoryCache;
use brain_infra::database::{
    InMemoryContentRepository, InMemoryShareLinkRepository, InMemoryTagRepository,
    InMemoryUserRepository,
};
use brain_infra::mail::LogMailer;

use crate::config::AppConfig;

/// Repository set the services are built on.
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub contents: Arc<dyn ContentRepository>,
    pub links: Arc<dyn ShareLinkRepository>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            tags: Arc::new(InMemoryTagRepository::new()),
            contents: Arc::new(InMemoryContentRepository::new()),
            links: Arc::new(InMemoryShareLinkRepository::new()),
        }
    }

    #[cfg(feature = "postgres")]
    async fn connect(config: &AppConfig) -> Self {
        use brain_infra::database::{
            PostgresContentRepository, PostgresShareLinkRepository, PostgresTagRepository,
            PostgresUserRepository, connect,
        };

        let Some(db_config) = &config.database else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Self::in_memory();
        };

        match connect(db_config).await {
            Ok(db) => Self {
                users: Arc::new(PostgresUserRepository::new(db.clone())),
                tags: Arc::new(PostgresTagRepository::new(db.clone())),
                contents: Arc::new(PostgresContentRepository::new(db.clone())),
                links: Arc::new(PostgresShareLinkRepository::new(db)),
            },
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Self::in_memory()
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn connect(_config: &AppConfig) -> Self {
        tracing::info!("Running without postgres feature - using in-memory repositories");
        Self::in_memory()
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountService>,
    pub content: Arc<ContentService>,
    pub share: Arc<ShareService>,
    pub users: Arc<dyn UserRepository>,
    /// Set when the OTP store runs on the in-memory cache, for the purge job.
    pub memory_cache: Option<Arc<InMemoryCache>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// Fails only when Redis is required (fallback disabled) and unreachable.
    pub async fn new(config: &AppConfig) -> Result<Self, CacheError> {
        let repos = Repositories::connect(config).await;
        let (cache, memory_cache) = Self::build_cache(config).await?;
        let mailer = Self::build_mailer(config);

        let state = Self::from_parts(repos, cache, mailer, config);
        tracing::info!("Application state initialized");

        Ok(Self {
            memory_cache,
            ..state
        })
    }

    /// Wire services over the given backends.
    pub fn from_parts(
        repos: Repositories,
        cache: Arc<dyn Cache>,
        mailer: Arc<dyn Mailer>,
        config: &AppConfig,
    ) -> Self {
        let otp = OtpStore::new(cache, config.otp_ttl);
        let accounts = AccountService::new(
            repos.users.clone(),
            Arc::new(Argon2PasswordService::new()),
            otp,
            mailer,
        );
        let content = Arc::new(ContentService::new(repos.contents, repos.tags));
        let share = ShareService::new(repos.links, content.clone());

        Self {
            accounts: Arc::new(accounts),
            content,
            share: Arc::new(share),
            users: repos.users,
            memory_cache: None,
        }
    }

    /// Token service built from `JWT_SECRET`, if one is set.
    pub fn token_service(config: &AppConfig) -> Option<Arc<dyn TokenService>> {
        match &config.jwt {
            Some(jwt) => Some(Arc::new(JwtTokenService::new(jwt.clone()))),
            None => {
                tracing::error!("JWT_SECRET is not set; authenticated routes will fail");
                None
            }
        }
    }

    async fn build_cache(
        config: &AppConfig,
    ) -> Result<(Arc<dyn Cache>, Option<Arc<InMemoryCache>>), CacheError> {
        #[cfg(feature = "redis")]
        if let Some(redis_config) = &config.redis {
            use brain_infra::cache::RedisCache;

            match RedisCache::connect(redis_config).await {
                Ok(redis) => return Ok((Arc::new(redis), None)),
                Err(e) if redis_config.fallback_to_memory => {
                    tracing::warn!("Redis unavailable: {}. Using in-memory cache.", e);
                }
                Err(e) => {
                    tracing::error!("Redis unavailable: {}. Fallback disabled.", e);
                    return Err(e);
                }
            }
        }

        #[cfg(not(feature = "redis"))]
        let _ = config;

        let memory = Arc::new(InMemoryCache::new());
        Ok((memory.clone(), Some(memory)))
    }

    fn build_mailer(config: &AppConfig) -> Arc<dyn Mailer> {
        #[cfg(feature = "mail")]
        if let Some(mail_config) = &config.mail {
            use brain_infra::mail::RelayMailer;

            tracing::info!(url = %mail_config.url, "Mail relay configured");
            return Arc::new(RelayMailer::new(mail_config.clone()));
        }

        #[cfg(not(feature = "mail"))]
        let _ = config;

        tracing::warn!("No mail relay configured; signup codes are written to the log");
        Arc::new(LogMailer)
    }
}
