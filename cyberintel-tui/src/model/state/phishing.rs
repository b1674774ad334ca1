//! 钓鱼文本检测面板状态

use cyberintel_core::PhishingReport;

/// 钓鱼文本检测面板状态
#[derive(Debug, Default)]
pub struct PhishingState {
    /// 待检测的邮件/短信文本
    pub input: String,
    /// 最近一次成功的分析结果；请求失败时保留原值
    pub report: Option<PhishingReport>,
}

impl PhishingState {
    /// 创建新的面板状态
    pub fn new() -> Self {
        Self::default()
    }
}
