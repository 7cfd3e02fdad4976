//! # 管理服务器
//!
//! Axum HTTP服务器：REST API、WebSocket 实时通道与前端静态文件服务

use crate::auth::JwtManager;
use crate::broadcast::Broadcaster;
use crate::error::{Result, ServiceError};
use axum::Router;
use axum::routing::get;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// 管理服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagementConfig {
    /// 监听地址
    pub bind_address: String,
    /// 监听端口
    pub port: u16,
    /// 是否启用CORS
    pub enable_cors: bool,
    /// 允许的CORS源地址
    pub cors_origins: Vec<String>,
    /// API前缀
    pub api_prefix: String,
    /// 前端静态文件目录
    pub static_dir: String,
    /// WebSocket单次写超时（秒），慢客户端不得拖住事件泵
    pub ws_write_timeout: u64,
}

impl Default for ManagementConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 5000,
            enable_cors: true,
            cors_origins: vec!["*".to_string()],
            api_prefix: "/api".to_string(),
            static_dir: "dist".to_string(),
            ws_write_timeout: 5,
        }
    }
}

/// 管理服务器应用状态
///
/// 进程级共享资源的显式容器，经由 axum `State` 注入各处理器。
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub jwt: Arc<JwtManager>,
    pub broadcaster: Arc<Broadcaster>,
    pub config: Arc<ManagementConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(
        db: Arc<DatabaseConnection>,
        jwt: Arc<JwtManager>,
        broadcaster: Arc<Broadcaster>,
        config: ManagementConfig,
    ) -> Self {
        Self {
            db,
            jwt,
            broadcaster,
            config: Arc::new(config),
        }
    }
}

/// 管理服务器
pub struct ManagementServer {
    /// 配置
    config: ManagementConfig,
    /// 路由器
    router: Router,
}

impl ManagementServer {
    /// 创建新的管理服务器
    pub fn new(
        config: ManagementConfig,
        db: Arc<DatabaseConnection>,
        jwt: Arc<JwtManager>,
        broadcaster: Arc<Broadcaster>,
    ) -> Result<Self> {
        let state = AppState::new(db, jwt, broadcaster, config.clone());
        let router = Self::create_router(state, &config);
        Ok(Self { config, router })
    }

    /// 创建路由器
    fn create_router(state: AppState, config: &ManagementConfig) -> Router {
        let api_routes = super::routes::create_routes(state.clone());

        let mut app = Router::new()
            .nest(&config.api_prefix, api_routes)
            .route(
                "/ws",
                get(super::handlers::realtime::ws_handler).with_state(state),
            )
            .route("/ping", get(super::handlers::system::ping_handler));

        // 静态文件服务：存在前端产物目录时启用，带SPA回退
        let static_dir = std::path::Path::new(&config.static_dir);
        if static_dir.exists() {
            tracing::info!("启用前端静态文件服务: {}", static_dir.display());
            let index = static_dir.join("index.html");
            app = app.fallback_service(
                ServeDir::new(static_dir).not_found_service(ServeFile::new(index)),
            );
        } else {
            tracing::warn!(
                "静态文件目录不存在，跳过前端服务: {}",
                static_dir.display()
            );
            app = app.route("/", get(super::handlers::system::root_handler));
        }

        let service_builder = ServiceBuilder::new().layer(TraceLayer::new_for_http());

        // 配置CORS
        if config.enable_cors {
            let mut cors_layer = CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::PUT,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::ACCEPT,
                    axum::http::header::ORIGIN,
                ]);

            if config.cors_origins.contains(&"*".to_string()) {
                cors_layer = cors_layer.allow_origin(Any);
            } else {
                let origins = config
                    .cors_origins
                    .iter()
                    .map(|origin| origin.parse::<axum::http::HeaderValue>())
                    .collect::<std::result::Result<Vec<_>, _>>();

                match origins {
                    Ok(origins) => {
                        cors_layer = cors_layer.allow_origin(origins);
                    }
                    Err(e) => {
                        tracing::warn!("CORS源配置无效: {e}，回退为允许所有源");
                        cors_layer = cors_layer.allow_origin(Any);
                    }
                }
            }

            app = app.layer(service_builder.layer(cors_layer));
        } else {
            app = app.layer(service_builder);
        }

        app
    }

    /// 取出路由器，供测试在任意监听器上启动服务
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// 启动服务器
    pub async fn serve(self) -> Result<()> {
        let bind_address = self.config.bind_address.clone();
        let ip = bind_address.parse::<std::net::IpAddr>().map_err(|e| {
            ServiceError::config(format!("无效的监听地址 '{bind_address}': {e}"))
        })?;
        let addr = SocketAddr::new(ip, self.config.port);

        tracing::info!("管理服务器启动，监听 {addr}");

        let listener = TcpListener::bind(&addr).await?;

        axum::serve(listener, self.router)
            .await
            .map_err(|e| ServiceError::internal(format!("管理服务器异常退出: {e}")))?;

        Ok(())
    }
}
