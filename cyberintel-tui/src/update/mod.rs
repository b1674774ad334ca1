//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，
//! 是唯一可以修改 Model 的地方。
//!
//! 与网络相关的消息不在这里执行 I/O：`update` 返回一个
//! `Option<Command>`，由主循环交给 Backend 层异步执行。
//! 这样空输入校验、busy 互斥这些规则可以在没有网络的情况下
//! 直接做单元测试（返回 None 即 “没有发出请求”）。
//!
//! 模块结构：
//!     mod navigation;         // 导航与面板切换
//!     mod content;            // 各面板的输入与提交
//!     mod api;                // 后台请求完成处理
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。

mod api;
mod content;
mod navigation;

use std::time::Instant;

use crate::message::AppMessage;
use crate::model::App;

/// 需要 Backend 层执行的一次网络请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 拉取仪表盘统计
    LoadDashboard,
    /// 分析 URL
    AnalyzeUrl { url: String },
    /// 实时分析密码（seq 标记这次编辑）
    AnalyzePassword { password: String, seq: u64 },
    /// 分析钓鱼文本
    AnalyzeText { text: String },
    /// 查询泄露数据库
    CheckBreach { email: String },
    /// 发送聊天消息
    SendChat { message: String },
}

/// 应用启动时执行一次：问候 toast + 仪表盘一次性加载
pub fn bootstrap(app: &mut App) -> Option<Command> {
    app.notifications
        .success("CyberIntel UI Initialized.", Instant::now());
    navigation::load_dashboard(app)
}

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::ToggleFocus => {
            // 浮层打开时不切换焦点
            if !app.router.profile_menu_open() && !app.search.open {
                app.focus = app.focus.toggle();
            }
            None
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Api(api_msg) => {
            api::update(app, api_msg);
            None
        }

        AppMessage::GoBack => {
            // 优先关闭打开的浮层
            if app.search.open {
                app.search.close();
            } else if app.router.profile_menu_open() {
                app.router.close_profile_menu();
            }
            app.clear_status();
            None
        }

        AppMessage::Refresh => navigation::refresh_dashboard(app),

        AppMessage::ToggleProfileMenu => {
            app.router.toggle_profile_menu();
            None
        }

        AppMessage::ShowAlerts => {
            app.notifications
                .info("System alerts are currently empty.", Instant::now());
            None
        }

        AppMessage::OpenSearch => {
            app.search.show();
            None
        }

        AppMessage::SearchInput(ch) => {
            app.search.query.push(ch);
            None
        }

        AppMessage::SearchBackspace => {
            app.search.query.pop();
            None
        }

        AppMessage::SearchSubmit => {
            let query = app.search.query.trim().to_string();
            if !query.is_empty() {
                app.notifications.success(
                    format!("Searching knowledge base for: {query}"),
                    Instant::now(),
                );
            }
            app.search.close();
            None
        }

        AppMessage::Noop => None,
    }
}
