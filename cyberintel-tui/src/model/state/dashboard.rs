//! 仪表盘状态

use chrono::{DateTime, Local};
use cyberintel_core::DashboardSummary;

/// 仪表盘状态
///
/// 数据在启动时一次性加载（仪表盘是默认视图），之后不会自动刷新；
/// Alt+r 可以手动重新拉取。
#[derive(Debug, Default)]
pub struct DashboardState {
    /// 聚合指标（None = 尚未加载完成）
    pub summary: Option<DashboardSummary>,
    /// 是否有请求在途
    pub loading: bool,
    /// 一次性加载是否已经触发过
    pub loaded: bool,
    /// 最近一次成功加载的时间
    pub refreshed_at: Option<DateTime<Local>>,
}

impl DashboardState {
    /// 创建新的仪表盘状态
    pub fn new() -> Self {
        Self::default()
    }
}
