//! AI 助手面板状态

use cyberintel_core::ChatTranscript;

/// AI 助手面板状态
#[derive(Debug, Default)]
pub struct AssistantState {
    /// 输入缓冲
    pub input: String,
    /// 会话记录（仅本次会话，含输入指示器）
    pub transcript: ChatTranscript,
}

impl AssistantState {
    /// 创建新的面板状态
    pub fn new() -> Self {
        Self::default()
    }
}
