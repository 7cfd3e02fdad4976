//! # 实时通知广播器
//!
//! 实体变更事件向所有在线客户端的发布端。发布即忘：不落盘、不重放、
//! 不确认。每个客户端持有一条有界出站队列，队列满时丢弃该客户端的
//! 事件并计数，发布方永不阻塞。

use dashmap::DashMap;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;

/// 每客户端出站队列容量
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// 事件类别，对应四类实体变更
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    UserUpdate,
    ProjectUpdate,
    InspectionUpdate,
    RepairUpdate,
}

impl EventKind {
    /// 事件名，与客户端监听的事件名一致
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserUpdate => "user_update",
            Self::ProjectUpdate => "project_update",
            Self::InspectionUpdate => "inspection_update",
            Self::RepairUpdate => "repair_update",
        }
    }
}

/// 广播事件：事件名加一个小负载（实体ID与一两个识别字段）
#[derive(Debug, Clone, Serialize)]
pub struct BroadcastEvent {
    pub event: EventKind,
    pub data: serde_json::Value,
}

/// 广播器
///
/// 进程级单实例，显式构造后注入各服务组件，不做隐式全局状态。
pub struct Broadcaster {
    /// 在线客户端出站通道注册表
    clients: DashMap<u64, mpsc::Sender<BroadcastEvent>>,
    /// 客户端ID分配器
    next_id: AtomicU64,
    /// 因队列满而丢弃的事件计数
    dropped: AtomicU64,
    /// 每客户端队列容量
    capacity: usize,
}

impl Broadcaster {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            clients: DashMap::new(),
            next_id: AtomicU64::new(1),
            dropped: AtomicU64::new(0),
            capacity,
        }
    }

    /// 注册一个新客户端，返回其ID和事件接收端
    pub fn register(&self) -> (u64, mpsc::Receiver<BroadcastEvent>) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::channel(self.capacity);
        self.clients.insert(id, tx);
        tracing::debug!("实时客户端注册: {id}");
        (id, rx)
    }

    /// 注销客户端，连接关闭时调用
    pub fn unregister(&self, client_id: u64) {
        self.clients.remove(&client_id);
        tracing::debug!("实时客户端注销: {client_id}");
    }

    /// 向所有在线客户端发布事件
    ///
    /// 逐客户端独立投递；队列满则丢弃该客户端的这条事件并计数，
    /// 已关闭的通道顺带清理。调用方不会因任何慢客户端被阻塞。
    pub fn publish(&self, event: EventKind, data: serde_json::Value) {
        let message = BroadcastEvent { event, data };
        let mut stale = Vec::new();

        for entry in &self.clients {
            match entry.value().try_send(message.clone()) {
                Ok(()) => {}
                Err(mpsc::error::TrySendError::Full(_)) => {
                    self.dropped.fetch_add(1, Ordering::Relaxed);
                    tracing::warn!(
                        client_id = *entry.key(),
                        event = event.as_str(),
                        "客户端出站队列已满，事件被丢弃"
                    );
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    stale.push(*entry.key());
                }
            }
        }

        for id in stale {
            self.clients.remove(&id);
        }

        tracing::debug!(
            event = event.as_str(),
            clients = self.clients.len(),
            "广播事件已发布"
        );
    }

    /// 当前在线客户端数
    #[must_use]
    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    /// 累计丢弃事件数
    #[must_use]
    pub fn dropped_events(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Self::new(DEFAULT_QUEUE_CAPACITY)
    }
}
