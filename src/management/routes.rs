//! # 路由配置
//!
//! 定义所有API路由。除 `/login` 外的管理端点一律要求有效令牌：
//! 原系统的管理接口不做鉴权是缺陷而非设计，这里统一补上。

use crate::management::server::AppState;
use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};

/// 创建所有API路由
pub fn create_routes(state: AppState) -> Router {
    let public = Router::new().route("/login", post(crate::management::handlers::auth::login));

    let protected = Router::new()
        .route(
            "/users",
            get(crate::management::handlers::users::list_users)
                .post(crate::management::handlers::users::create_user),
        )
        .route(
            "/projects",
            get(crate::management::handlers::projects::list_projects)
                .post(crate::management::handlers::projects::create_project),
        )
        .route(
            "/devices",
            get(crate::management::handlers::devices::list_devices),
        )
        .route(
            "/engineers",
            get(crate::management::handlers::engineers::list_engineers),
        )
        .route(
            "/inspections",
            post(crate::management::handlers::inspections::create_inspection),
        )
        .route(
            "/repairs",
            get(crate::management::handlers::repairs::list_repairs)
                .post(crate::management::handlers::repairs::create_repair),
        )
        .route(
            "/repairs/{id}",
            put(crate::management::handlers::repairs::update_repair),
        )
        .route_layer(from_fn_with_state(
            state.clone(),
            crate::management::middleware::auth::auth,
        ));

    public.merge(protected).with_state(state)
}
