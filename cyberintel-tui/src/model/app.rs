//! 应用主状态结构

use cyberintel_core::{BusyState, NotificationQueue, ViewRouter};

use super::state::{
    AssistantState, BreachState, DashboardState, PasswordLabState, PhishingState, SearchState,
    UrlScannerState,
};
use super::{FocusPanel, NavigationState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 视图路由（单一激活面板 + 档案菜单浮层）
    pub router: ViewRouter,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// toast 通知队列
    pub notifications: NotificationQueue,

    /// 各操作按钮的 busy 状态
    pub busy: BusyState,

    /// 顶栏知识库搜索框
    pub search: SearchState,

    // === 各面板状态 ===
    /// 仪表盘状态
    pub dashboard: DashboardState,
    /// URL 扫描面板状态
    pub url_scanner: UrlScannerState,
    /// 密码实验室面板状态
    pub password_lab: PasswordLabState,
    /// 钓鱼文本检测面板状态
    pub phishing: PhishingState,
    /// 泄露查询面板状态
    pub breach: BreachState,
    /// AI 助手面板状态
    pub assistant: AssistantState,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            router: ViewRouter::new(),
            status_message: None,
            notifications: NotificationQueue::new(),
            busy: BusyState::new(),
            search: SearchState::new(),
            dashboard: DashboardState::new(),
            url_scanner: UrlScannerState::new(),
            password_lab: PasswordLabState::new(),
            phishing: PhishingState::new(),
            breach: BreachState::new(),
            assistant: AssistantState::new(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
