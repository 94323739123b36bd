//! Common test utilities for E2E tests

use std::sync::Arc;

use async_trait::async_trait;
use atelier::ai::{AssistantGateway, GatewayError};
use atelier::ai::mock::ScriptedGateway;
use atelier::content::ContentStore;
use atelier::session::ChatMessage;
use atelier::{config, AppState};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::Notify;

/// Test server instance
pub struct TestServer {
    pub addr: String,
    pub state: AppState,
    pub _temp_dir: TempDir,
    pub client: reqwest::Client,
}

impl TestServer {
    /// Create a test server with a gateway that replies "Test reply."
    pub async fn new() -> Self {
        Self::with_gateway(Arc::new(ScriptedGateway::replying("Test reply."))).await
    }

    /// Create a test server with an explicit gateway
    pub async fn with_gateway(gateway: Arc<dyn AssistantGateway>) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        let state = AppState::with_gateway(config, gateway);
        Self::start(state, temp_dir).await
    }

    /// Create a test server with explicit content records
    pub async fn with_content(content: ContentStore) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        let state = AppState::with_content(
            config,
            content,
            Arc::new(ScriptedGateway::replying("Test reply.")),
        );
        Self::start(state, temp_dir).await
    }

    async fn start(state: AppState, temp_dir: TempDir) -> Self {
        // Create HTTP client
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap();

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let addr_str = format!("http://{}", addr);

        // Build router
        let app = atelier::build_router(state.clone());

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait a bit for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Self {
            addr: addr_str,
            state,
            _temp_dir: temp_dir,
            client,
        }
    }

    /// Get base URL for API requests
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.addr, path)
    }

    /// Path of the asset root this server serves images from
    pub fn asset_root(&self) -> std::path::PathBuf {
        self.state.config.assets.root.clone()
    }
}

/// Create test configuration rooted in the given temp directory
fn test_config(temp_dir: &TempDir) -> config::AppConfig {
    config::AppConfig {
        server: config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Let OS assign port
            domain: "localhost".to_string(),
            protocol: "http".to_string(),
        },
        assets: config::AssetConfig {
            root: temp_dir.path().join("images"),
        },
        ai: config::AiConfig {
            api_key: Some("test-key".to_string()),
            model: "gemini-2.5-flash".to_string(),
            endpoint: "https://generativelanguage.example.com/v1beta".to_string(),
            timeout_seconds: 10,
        },
        logging: config::LoggingConfig {
            level: "info".to_string(),
            format: "pretty".to_string(),
        },
    }
}

/// Gateway that blocks until released, for exercising the pending flag
pub struct BlockingGateway {
    release: Arc<Notify>,
    reply: String,
}

impl BlockingGateway {
    pub fn new(reply: impl Into<String>) -> (Arc<Self>, Arc<Notify>) {
        let release = Arc::new(Notify::new());
        let gateway = Arc::new(Self {
            release: release.clone(),
            reply: reply.into(),
        });
        (gateway, release)
    }
}

#[async_trait]
impl AssistantGateway for BlockingGateway {
    async fn respond(
        &self,
        _message: &str,
        _history: &[ChatMessage],
    ) -> Result<String, GatewayError> {
        self.release.notified().await;
        Ok(self.reply.clone())
    }
}
