//! Atelier - a minimal single-user portfolio server
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      API Layer (Axum)                        │
//! │  - Content, view, chat, gallery, asset endpoints            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Session Layer                             │
//! │  - View router, chat session, gallery lightbox              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │               Content Store / AI Gateway                     │
//! │  - Immutable in-memory records                              │
//! │  - Hosted model API (reqwest)                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - `api`: HTTP handlers and DTOs
//! - `session`: per-visitor mutable state containers
//! - `content`: static records loaded once at startup
//! - `ai`: gateway to the hosted model
//! - `markdown`: markdown to rich-text tree presenter
//! - `config`: configuration management
//! - `error`: error types

pub mod ai;
pub mod api;
pub mod config;
pub mod content;
pub mod error;
pub mod markdown;
pub mod session;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::session::GalleryViewer;

/// Lightbox viewer bound to the project whose gallery page is open
#[derive(Debug)]
pub struct ActiveGallery {
    pub project_id: String,
    pub viewer: GalleryViewer,
}

/// Application state shared across all handlers
///
/// Cloned per request. The three session containers sit behind async
/// mutexes, which gives the same guarantee the browser event loop
/// gave the original UI: at most one state-mutating callback at a
/// time per container.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<config::AppConfig>,

    /// Immutable site content
    pub content: Arc<content::ContentStore>,

    /// Current top-level view
    pub router: Arc<Mutex<session::ViewRouter>>,

    /// Chat transcript and flags
    pub chat: Arc<Mutex<session::ChatSession>>,

    /// Gallery lightbox, when a gallery page has been opened
    pub lightbox: Arc<Mutex<Option<ActiveGallery>>>,

    /// Outbound AI gateway
    pub gateway: Arc<dyn ai::AssistantGateway>,
}

impl AppState {
    /// Initialize application state with the HTTP gateway
    ///
    /// # Steps
    /// 1. Load the seeded content store
    /// 2. Build the system preamble and gateway client
    /// 3. Seed the chat session with the assistant greeting
    ///
    /// # Errors
    /// Returns error if the gateway client cannot be constructed
    pub fn new(config: config::AppConfig) -> Result<Self, error::AppError> {
        let content = content::ContentStore::seeded();
        let gateway = ai::HttpAssistantGateway::new(config.ai.clone(), &content)
            .map_err(|e| error::AppError::Config(e.to_string()))?;

        Ok(Self::with_parts(config, content, Arc::new(gateway)))
    }

    /// Initialize application state with an explicit gateway
    ///
    /// Used by tests to inject mock gateways.
    pub fn with_gateway(
        config: config::AppConfig,
        gateway: Arc<dyn ai::AssistantGateway>,
    ) -> Self {
        Self::with_parts(config, content::ContentStore::seeded(), gateway)
    }

    /// Initialize application state with explicit content and gateway
    ///
    /// Used by tests that need content shapes the seed does not cover,
    /// such as a project without any images.
    pub fn with_content(
        config: config::AppConfig,
        content: content::ContentStore,
        gateway: Arc<dyn ai::AssistantGateway>,
    ) -> Self {
        Self::with_parts(config, content, gateway)
    }

    fn with_parts(
        config: config::AppConfig,
        content: content::ContentStore,
        gateway: Arc<dyn ai::AssistantGateway>,
    ) -> Self {
        let chat = session::ChatSession::new(&content.profile().name);

        Self {
            config: Arc::new(config),
            content: Arc::new(content),
            router: Arc::new(Mutex::new(session::ViewRouter::new())),
            chat: Arc::new(Mutex::new(chat)),
            lightbox: Arc::new(Mutex::new(None)),
            gateway,
        }
    }
}

/// Build the Axum router with all routes.
///
/// This is shared by the binary and integration tests to keep route
/// composition consistent across environments.
pub fn build_router(state: AppState) -> axum::Router {
    use axum::Router;
    use tower_http::{compression::CompressionLayer, trace::TraceLayer};

    let cors_layer = build_cors_layer(&state.config.server);

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .nest(
            "/api",
            api::content_router()
                .merge(api::view_router())
                .merge(api::chat_router()),
        )
        .merge(api::gallery_router())
        .merge(api::assets_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

fn build_cors_layer(server: &config::ServerConfig) -> tower_http::cors::CorsLayer {
    use axum::http::HeaderValue;
    use tower_http::cors::{Any, CorsLayer};

    if !server.protocol.eq_ignore_ascii_case("https") {
        return CorsLayer::permissive();
    }

    let allowed_origin = server.base_url();
    match HeaderValue::from_str(&allowed_origin) {
        Ok(origin) => CorsLayer::new()
            .allow_origin([origin])
            .allow_methods(Any)
            .allow_headers(Any),
        Err(error) => {
            tracing::error!(
                %error,
                origin = %allowed_origin,
                "Failed to parse CORS origin from server base URL; denying cross-origin requests"
            );
            CorsLayer::new().allow_methods(Any).allow_headers(Any)
        }
    }
}

async fn health_check() -> &'static str {
    "OK"
}
