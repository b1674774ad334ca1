//!
//! app.rs
//! 应用主循环
//!
//! 每轮循环：
//!   1. 排空完成消息通道（后台任务送回的 ApiMessage）
//!   2. 清理过期的 toast
//!   3. 渲染 UI
//!   4. 轮询输入事件（100ms 超时），翻译成消息并交给 Update 层
//!
//! Update 层返回的 Command 交给 Backend 层异步执行；
//! 对应的完成消息会在之后某轮循环的第 1 步被消费。

use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::ApiService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub async fn run(
    terminal: &mut Term,
    app: &mut App,
    services: &ApiService,
    completions: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    // 启动：问候 toast + 仪表盘一次性加载
    if let Some(command) = update::bootstrap(app) {
        services.dispatch(command);
    }

    loop {
        // 1. 排空后台任务的完成消息
        while let Ok(msg) = completions.try_recv() {
            if let Some(command) = update::update(app, msg) {
                services.dispatch(command);
            }
        }

        // 2. 清理过期 toast
        app.notifications.tick(Instant::now());

        // 3. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 4. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 5. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            if let Some(command) = update::update(app, msg) {
                services.dispatch(command);
            }
        }
    }

    Ok(())
}
