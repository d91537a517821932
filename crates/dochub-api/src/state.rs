//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use dochub_auth::jwt::{JwtDecoder, JwtEncoder};
use dochub_core::config::AppConfig;
use dochub_database::repositories::document::DocumentRepository;
use dochub_database::repositories::user::UserRepository;
use dochub_service::{AuthService, DocumentService, SearchService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
/// Repositories and crypto primitives live inside the services;
/// handlers only see the service layer (plus the raw pool for the
/// health probe).
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    /// Authentication service
    pub auth_service: Arc<AuthService>,
    /// User account service
    pub user_service: Arc<UserService>,
    /// Document service
    pub document_service: Arc<DocumentService>,
    /// Search service
    pub search_service: Arc<SearchService>,
}

impl AppState {
    /// Wires repositories and services from configuration and a pool.
    pub fn build(config: Arc<AppConfig>, db_pool: PgPool) -> Self {
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let document_repo = Arc::new(DocumentRepository::new(db_pool.clone()));

        let password_min_length = config.auth.password_min_length;

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_repo),
            jwt_encoder,
            jwt_decoder,
            password_min_length,
        ));
        let user_service = Arc::new(UserService::new(
            Arc::clone(&user_repo),
            Arc::clone(&document_repo),
            password_min_length,
        ));
        let document_service = Arc::new(DocumentService::new(
            Arc::clone(&document_repo),
            Arc::clone(&user_repo),
        ));
        let search_service = Arc::new(SearchService::new(user_repo, document_repo));

        Self {
            config,
            db_pool,
            auth_service,
            user_service,
            document_service,
            search_service,
        }
    }
}
