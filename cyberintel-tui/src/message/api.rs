//! 后台请求完成消息
//!
//! 每个变体对应一个面板的一次请求。变体携带完整的 `Result`，
//! Update 层先释放 busy 状态再检查结果，保证失败也能恢复按钮。

use cyberintel_client::{
    ApiError, BreachCheck, ChatReply, DashboardStats, PasswordAnalysis, PhishingAnalysis,
    UrlAnalysis,
};

/// 请求完成消息
#[derive(Debug)]
pub enum ApiMessage {
    /// 仪表盘统计加载完成
    DashboardLoaded(Result<DashboardStats, ApiError>),
    /// URL 分析完成
    UrlScanFinished(Result<UrlAnalysis, ApiError>),
    /// 密码实时分析完成（seq 用于丢弃过期响应）
    PasswordAnalyzed {
        seq: u64,
        result: Result<PasswordAnalysis, ApiError>,
    },
    /// 钓鱼文本分析完成
    TextScanFinished(Result<PhishingAnalysis, ApiError>),
    /// 泄露查询完成
    BreachSearchFinished(Result<BreachCheck, ApiError>),
    /// 助手回复到达
    ChatReplyReceived(Result<ChatReply, ApiError>),
}
