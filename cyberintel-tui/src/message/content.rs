//! 内容面板子消息
//!
//! 输入类消息按当前激活的面板路由：同一个 `Input('a')`
//! 在 URL 面板追加到 URL 缓冲，在密码面板追加到密码缓冲
//! 并同时触发一次实时分析。

/// 内容面板消息
#[derive(Debug, Clone, Copy)]
pub enum ContentMessage {
    /// 输入字符
    Input(char),
    /// 退格删除
    Backspace,
    /// 清空输入缓冲
    ClearInput,
    /// 提交（Enter 或操作按钮）
    Submit,
    /// 切换密码明文/掩码显示（仅密码面板）
    ToggleMask,
}
