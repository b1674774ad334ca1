//! 泄露查询面板状态

use cyberintel_core::BreachReport;

/// 泄露查询面板状态
///
/// 与其他面板不同：每次发起查询时结果区会先被清空隐藏，
/// 保证新请求在途期间绝不显示上一次的过期结果。
#[derive(Debug, Default)]
pub struct BreachState {
    /// 待查询的邮箱地址
    pub input: String,
    /// 当前展示的查询结果
    pub report: Option<BreachReport>,
}

impl BreachState {
    /// 创建新的面板状态
    pub fn new() -> Self {
        Self::default()
    }
}
