//! API 调度服务
//!
//! 为每个 [`Command`] 生成一个后台任务。任务体只有两步：
//! 调用客户端方法、把 `Result` 原样装进完成消息送回主循环。
//! 完成消息在所有路径上都会发送，这是 busy 状态必然被释放的根基 ——
//! 清理是结构性的，不依赖每个调用点自己记得收尾。
//!
//! 没有取消机制：在途请求总会跑完，其结果只写入所属面板的状态。

use std::sync::Arc;

use cyberintel_client::SentinelClient;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::{ApiMessage, AppMessage};
use crate::update::Command;

/// API 调度服务
///
/// 持有客户端与完成消息通道，供主循环调用
pub struct ApiService {
    client: Arc<SentinelClient>,
    tx: UnboundedSender<AppMessage>,
}

impl ApiService {
    /// 创建调度服务实例
    pub fn new(client: Arc<SentinelClient>, tx: UnboundedSender<AppMessage>) -> Self {
        Self { client, tx }
    }

    /// 异步执行一个 Command，立即返回
    pub fn dispatch(&self, command: Command) {
        let client = self.client.clone();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let msg = match command {
                Command::LoadDashboard => {
                    ApiMessage::DashboardLoaded(client.dashboard_stats().await)
                }
                Command::AnalyzeUrl { url } => {
                    ApiMessage::UrlScanFinished(client.analyze_url(&url).await)
                }
                Command::AnalyzePassword { password, seq } => ApiMessage::PasswordAnalyzed {
                    seq,
                    result: client.analyze_password(&password).await,
                },
                Command::AnalyzeText { text } => {
                    ApiMessage::TextScanFinished(client.analyze_email(&text).await)
                }
                Command::CheckBreach { email } => {
                    ApiMessage::BreachSearchFinished(client.check_breach(&email).await)
                }
                Command::SendChat { message } => {
                    ApiMessage::ChatReplyReceived(client.chat(&message).await)
                }
            };

            // 主循环已退出时发送会失败，此时丢弃完成消息即可
            if tx.send(AppMessage::Api(msg)).is_err() {
                log::debug!("completion channel closed, dropping api message");
            }
        });
    }
}
