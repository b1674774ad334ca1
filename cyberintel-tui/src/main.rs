//! CyberIntel TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: API 调度 (`backend/`)
//!
//! 与上游分析 API 的所有交互都是异步的：Update 层返回 `Command`，
//! Backend 层为每个 Command 生成一个 tokio 任务，任务完成后通过
//! mpsc 通道把 `ApiMessage` 送回主循环。

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use cyberintel_client::SentinelClient;
use tokio::sync::mpsc;

use backend::{ApiService, ConfigService, LocalConfigService};
use util::{init_terminal, restore_terminal};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // 1. 加载配置（缺失时使用默认值）
    let config = LocalConfigService.load().unwrap_or_default();
    view::theme::set_theme_index(config.theme_index());

    // 2. 创建 API 调度服务与完成消息通道
    let (tx, mut rx) = mpsc::unbounded_channel();
    let client = Arc::new(SentinelClient::new(config.api_base.clone()));
    let services = ApiService::new(client, tx);

    // 3. 初始化终端
    let mut terminal = init_terminal()?;

    // 4. 创建应用实例
    let mut app = model::App::new();

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app, &services, &mut rx).await;

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 7. 返回结果
    result
}
