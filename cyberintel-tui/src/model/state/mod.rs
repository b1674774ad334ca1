//! 面板状态模块
//!
//! 定义各个面板的业务数据结构，一个面板一个模块。
//! ViewId 只负责标识当前处于哪个面板（门牌号），
//! 这里的 State 才是面板的内容（输入缓冲、分析结果、加载标志）。

mod assistant;
mod breach;
mod dashboard;
mod password_lab;
mod phishing;
mod search;
mod url_scanner;

pub use assistant::AssistantState;
pub use breach::BreachState;
pub use dashboard::DashboardState;
pub use password_lab::PasswordLabState;
pub use phishing::PhishingState;
pub use search::SearchState;
pub use url_scanner::UrlScannerState;
