//! 主消息枚举

use super::{ApiMessage, ContentMessage, NavigationMessage};

/// 应用消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,
    /// 切换焦点面板
    ToggleFocus,
    /// 导航面板子消息
    Navigation(NavigationMessage),
    /// 内容面板子消息
    Content(ContentMessage),
    /// 后台请求完成消息
    Api(ApiMessage),
    /// 返回/关闭浮层
    GoBack,
    /// 手动刷新仪表盘
    Refresh,
    /// 切换档案菜单浮层
    ToggleProfileMenu,
    /// 查看系统告警（固定提示）
    ShowAlerts,
    /// 展开顶栏搜索框
    OpenSearch,
    /// 搜索框输入字符
    SearchInput(char),
    /// 搜索框退格
    SearchBackspace,
    /// 提交搜索
    SearchSubmit,
    /// 无操作，用于代替 Option::None
    Noop,
}
