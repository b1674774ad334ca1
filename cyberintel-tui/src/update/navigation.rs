//! 导航与面板切换逻辑
//!
//! 所有面板切换都经过 [`activate`]：它是单一激活视图不变量的
//! 唯一修改点，同时同步导航指示器并关闭档案菜单浮层。

use cyberintel_core::ViewId;

use crate::message::NavigationMessage;
use crate::model::App;
use crate::update::Command;

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) -> Option<Command> {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
            None
        }
        NavigationMessage::SelectNext => {
            app.navigation.select_next();
            None
        }
        NavigationMessage::SelectFirst => {
            app.navigation.select_first();
            None
        }
        NavigationMessage::SelectLast => {
            app.navigation.select_last();
            None
        }
        NavigationMessage::Confirm => {
            let view = app.navigation.current_view()?;
            activate(app, view)
        }
    }
}

/// 激活一个面板：路由切换（附带关闭浮层）、同步导航指示器、清状态栏。
/// 程序化切换也必须走这里。首次进入仪表盘时触发一次性加载。
pub fn activate(app: &mut App, view: ViewId) -> Option<Command> {
    app.router.switch_to(view);
    app.navigation.sync_to(view);
    app.clear_status();
    if view == ViewId::Dashboard {
        return load_dashboard(app);
    }
    None
}

/// 仪表盘一次性加载：只在还没加载过时发出请求
pub fn load_dashboard(app: &mut App) -> Option<Command> {
    if app.dashboard.loaded || app.dashboard.loading {
        return None;
    }
    app.dashboard.loading = true;
    Some(Command::LoadDashboard)
}

/// Alt+r 手动刷新：仅在仪表盘上且没有请求在途时重新拉取
pub fn refresh_dashboard(app: &mut App) -> Option<Command> {
    if app.router.active() != ViewId::Dashboard || app.dashboard.loading {
        return None;
    }
    app.set_status("Refreshing...");
    app.dashboard.loading = true;
    Some(Command::LoadDashboard)
}
