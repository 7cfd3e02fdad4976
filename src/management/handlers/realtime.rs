//! # 实时通道处理器
//!
//! WebSocket 事件泵：把广播器队列里的事件逐条写给客户端。连接仅作
//! 下行通知，客户端发来的文本一律忽略，收到关闭帧或写失败即注销。

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use std::time::Duration;

use crate::management::server::AppState;

/// WebSocket 升级入口
///
/// `GET /ws`
pub async fn ws_handler(State(state): State<AppState>, upgrade: WebSocketUpgrade) -> Response {
    upgrade.on_upgrade(move |socket| handle_socket(socket, state))
}

/// 单连接事件泵
async fn handle_socket(socket: WebSocket, state: AppState) {
    let (client_id, mut events) = state.broadcaster.register();
    let write_timeout = Duration::from_secs(state.config.ws_write_timeout);
    let (mut sink, mut stream) = socket.split();

    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else {
                    break;
                };
                let text = match serde_json::to_string(&event) {
                    Ok(text) => text,
                    Err(e) => {
                        tracing::warn!(client_id, "事件序列化失败: {e}");
                        continue;
                    }
                };
                // 慢客户端写超时直接断开，不拖住事件泵
                let send = tokio::time::timeout(
                    write_timeout,
                    sink.send(Message::Text(text.into())),
                );
                match send.await {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => {
                        tracing::debug!(client_id, "客户端写入失败，断开: {e}");
                        break;
                    }
                    Err(_) => {
                        tracing::warn!(client_id, "客户端写入超时，断开");
                        break;
                    }
                }
            }
            message = stream.next() => {
                match message {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    // 上行消息不承载语义，忽略
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    state.broadcaster.unregister(client_id);
    tracing::debug!(client_id, "实时连接关闭");
}
