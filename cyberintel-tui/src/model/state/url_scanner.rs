//! URL 扫描面板状态

use cyberintel_core::UrlReport;

/// URL 扫描面板状态
#[derive(Debug, Default)]
pub struct UrlScannerState {
    /// 输入缓冲
    pub input: String,
    /// 最近一次成功的分析结果；请求失败时保留原值
    pub report: Option<UrlReport>,
}

impl UrlScannerState {
    /// 创建新的面板状态
    pub fn new() -> Self {
        Self::default()
    }
}
