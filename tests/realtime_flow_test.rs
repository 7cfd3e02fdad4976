//! 实时通道集成测试
//!
//! 对着随机端口上的完整服务开真实WebSocket连接，验证事件帧投递、
//! 无重放、断开注销与慢客户端写超时淘汰。

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use maintenance_api::auth::JwtManager;
use maintenance_api::broadcast::{Broadcaster, EventKind};
use maintenance_api::config::DatabaseConfig;
use maintenance_api::database;
use maintenance_api::management::{ManagementConfig, ManagementServer};
use serde_json::{Value, json};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

/// 在随机端口启动服务，返回基地址与广播器句柄
async fn spawn_app() -> (String, Arc<Broadcaster>) {
    let db_config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        ..DatabaseConfig::default()
    };
    let db = database::init_database(&db_config).await.unwrap();
    database::run_migrations(&db).await.unwrap();
    database::ensure_default_admin(&db).await.unwrap();

    let broadcaster = Arc::new(Broadcaster::default());
    let config = ManagementConfig {
        bind_address: "127.0.0.1".to_string(),
        enable_cors: false,
        static_dir: "no-such-dir".to_string(),
        ws_write_timeout: 1,
        ..ManagementConfig::default()
    };
    let server = ManagementServer::new(
        config,
        Arc::new(db),
        Arc::new(JwtManager::new("realtime-test-secret", 3600)),
        broadcaster.clone(),
    )
    .unwrap();
    let router = server.into_router();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{addr}"), broadcaster)
}

/// 轮询等待在线客户端数达到期望值
async fn wait_for_clients(broadcaster: &Broadcaster, expected: usize) {
    for _ in 0..200 {
        if broadcaster.client_count() == expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!(
        "在线客户端数未达到 {expected}，当前 {}",
        broadcaster.client_count()
    );
}

fn ws_url(base: &str) -> String {
    format!("{}/ws", base.replace("http://", "ws://"))
}

#[tokio::test]
async fn test_mutation_event_delivered_as_text_frame() {
    let (base, broadcaster) = spawn_app().await;

    let (mut ws, _) = connect_async(ws_url(&base)).await.unwrap();
    // 升级完成后注册在独立任务里进行，等注册生效再触发变更
    wait_for_clients(&broadcaster, 1).await;

    let client = reqwest::Client::new();
    let login: Value = client
        .post(format!("{base}/api/login"))
        .json(&json!({"username": "admin", "password": "ht886631"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let token = login["token"].as_str().unwrap();

    let resp = client
        .post(format!("{base}/api/projects"))
        .bearer_auth(token)
        .json(&json!({"name": "泵房维保", "client": "某水务"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let frame = tokio::time::timeout(Duration::from_secs(5), ws.next())
        .await
        .unwrap()
        .unwrap()
        .unwrap();
    let Message::Text(text) = frame else {
        panic!("预期文本帧，收到 {frame:?}");
    };
    let event: Value = serde_json::from_str(text.as_str()).unwrap();
    assert_eq!(event["event"], "project_update");
    assert_eq!(event["data"]["type"], "created");
    assert_eq!(event["data"]["name"], "泵房维保");

    // 事件发布之后才连接的客户端收不到历史事件
    let (mut late, _) = connect_async(ws_url(&base)).await.unwrap();
    wait_for_clients(&broadcaster, 2).await;
    let nothing = tokio::time::timeout(Duration::from_millis(300), late.next()).await;
    assert!(nothing.is_err());
}

#[tokio::test]
async fn test_closed_client_is_unregistered() {
    let (base, broadcaster) = spawn_app().await;

    let (mut ws, _) = connect_async(ws_url(&base)).await.unwrap();
    wait_for_clients(&broadcaster, 1).await;

    ws.close(None).await.unwrap();
    wait_for_clients(&broadcaster, 0).await;

    // 注销后发布不再计入任何客户端
    broadcaster.publish(EventKind::UserUpdate, json!({"user_id": 1}));
    assert_eq!(broadcaster.client_count(), 0);
}

#[tokio::test]
async fn test_stalled_client_disconnected_by_write_timeout() {
    let (base, broadcaster) = spawn_app().await;

    // 这个客户端完成握手后从不读取
    let (_stalled, _) = connect_async(ws_url(&base)).await.unwrap();
    wait_for_clients(&broadcaster, 1).await;

    // 大负载塞满对端TCP缓冲，事件泵的写入会挂起并触发写超时
    let blob = "x".repeat(1 << 20);
    for i in 0..70 {
        broadcaster.publish(
            EventKind::RepairUpdate,
            json!({"repair_id": i, "blob": blob}),
        );
    }

    wait_for_clients(&broadcaster, 0).await;
}
