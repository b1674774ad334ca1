//! 导航面板子消息

/// 导航消息
#[derive(Debug, Clone, Copy)]
pub enum NavigationMessage {
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳到第一项
    SelectFirst,
    /// 跳到最后一项
    SelectLast,
    /// 确认选择，激活对应面板
    Confirm,
}
