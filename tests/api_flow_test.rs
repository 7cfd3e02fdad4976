//! HTTP 接口集成测试
//!
//! 在随机端口上启动完整路由栈（内存SQLite），用真实HTTP客户端走一遍
//! 登录、鉴权和各资源端点。

use std::sync::Arc;

use maintenance_api::auth::JwtManager;
use maintenance_api::broadcast::Broadcaster;
use maintenance_api::config::DatabaseConfig;
use maintenance_api::database;
use maintenance_api::management::{ManagementConfig, ManagementServer};
use serde_json::{Value, json};

/// 在随机端口启动服务，返回基地址
async fn spawn_app() -> String {
    let db_config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        ..DatabaseConfig::default()
    };
    let db = database::init_database(&db_config).await.unwrap();
    database::run_migrations(&db).await.unwrap();
    database::ensure_default_admin(&db).await.unwrap();

    let config = ManagementConfig {
        bind_address: "127.0.0.1".to_string(),
        enable_cors: false,
        static_dir: "no-such-dir".to_string(),
        ..ManagementConfig::default()
    };
    let server = ManagementServer::new(
        config,
        Arc::new(db),
        Arc::new(JwtManager::new("api-test-secret", 3600)),
        Arc::new(Broadcaster::default()),
    )
    .unwrap();
    let router = server.into_router();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

/// 以默认管理员登录，返回访问令牌
async fn login_admin(client: &reqwest::Client, base: &str) -> String {
    let body: Value = client
        .post(format!("{base}/api/login"))
        .json(&json!({"username": "admin", "password": "ht886631"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], true);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_ping() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/ping")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_login_success_and_failure() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/login"))
        .json(&json!({"username": "admin", "password": "ht886631", "device_id": "pad-1"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["username"], "admin");
    assert_eq!(body["user"]["is_admin"], true);
    assert_eq!(body["user"]["avatar"], "系");

    let resp = client
        .post(format!("{base}/api/login"))
        .json(&json!({"username": "admin", "password": "wrong"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);

    // 缺少必填字段
    let resp = client
        .post(format!("{base}/api/login"))
        .json(&json!({"username": "admin"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_api_requires_token() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    // 无令牌
    let resp = client.get(format!("{base}/api/users")).send().await.unwrap();
    assert_eq!(resp.status(), 401);

    // 伪造令牌
    let resp = client
        .get(format!("{base}/api/projects"))
        .bearer_auth("not-a-real-token")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    // 写端点同样被拦
    let resp = client
        .post(format!("{base}/api/projects"))
        .json(&json!({"name": "x", "client": "y"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_user_creation_flow() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let token = login_admin(&client, &base).await;

    let resp = client
        .post(format!("{base}/api/users"))
        .bearer_auth(&token)
        .json(&json!({
            "username": "lisi",
            "password": "pw123456",
            "full_name": "李四",
            "role": "operator",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert!(body["user_id"].as_i64().is_some());

    // 列表是裸数组，且不包含凭据字段
    let users: Value = client
        .get(format!("{base}/api/users"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.get("password_hash").is_none()));

    // 重名返回400
    let resp = client
        .post(format!("{base}/api/users"))
        .bearer_auth(&token)
        .json(&json!({
            "username": "lisi",
            "password": "pw123456",
            "full_name": "另一个李四",
            "role": "operator",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_project_inspection_repair_flow() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let token = login_admin(&client, &base).await;

    // 创建带内联子记录的项目
    let resp = client
        .post(format!("{base}/api/projects"))
        .bearer_auth(&token)
        .json(&json!({
            "name": "仓库维保",
            "client": "某物流",
            "start_date": "2024-05-01",
            "devices": [{"name": "叉车充电桩", "type": "充电桩", "location": "B区"}],
            "engineers": [{"name": "钱七", "phone": "13700000000"}],
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let project_id = body["project_id"].as_i64().unwrap();

    // 按项目过滤设备
    let devices: Value = client
        .get(format!("{base}/api/devices?project_id={project_id}"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let devices = devices.as_array().unwrap();
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0]["type"], "充电桩");
    let device_id = devices[0]["id"].as_i64().unwrap();

    // 发起巡检后项目的last_inspection被刷新
    let resp = client
        .post(format!("{base}/api/inspections"))
        .bearer_auth(&token)
        .json(&json!({"project_id": project_id}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let projects: Value = client
        .get(format!("{base}/api/projects"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let project = &projects.as_array().unwrap()[0];
    assert!(project["last_inspection"].as_str().is_some());

    // 创建并更新维修工单
    let resp = client
        .post(format!("{base}/api/repairs"))
        .bearer_auth(&token)
        .json(&json!({
            "project_id": project_id,
            "device_id": device_id,
            "title": "充电桩跳闸",
            "description": "上电即跳",
            "priority": "high",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let repair_id = body["repair_id"].as_i64().unwrap();

    let resp = client
        .put(format!("{base}/api/repairs/{repair_id}"))
        .bearer_auth(&token)
        .json(&json!({"status": "completed"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let repairs: Value = client
        .get(format!("{base}/api/repairs"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let repairs = repairs.as_array().unwrap();
    assert_eq!(repairs.len(), 1);
    assert_eq!(repairs[0]["status"], "completed");

    // 不存在的工单返回404
    let resp = client
        .put(format!("{base}/api/repairs/99999"))
        .bearer_auth(&token)
        .json(&json!({"status": "completed"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_validation_errors_return_400() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let token = login_admin(&client, &base).await;

    // 缺少client
    let resp = client
        .post(format!("{base}/api/projects"))
        .bearer_auth(&token)
        .json(&json!({"name": "只有名字"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // 非法日期
    let resp = client
        .post(format!("{base}/api/projects"))
        .bearer_auth(&token)
        .json(&json!({"name": "坏日期", "client": "c", "start_date": "not-a-date"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
}
