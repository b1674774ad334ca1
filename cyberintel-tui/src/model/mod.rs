//！┌────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ApiMsg    │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │ Command       │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │──┐ tokio     │
//！│      │ (Util)  │                                │    层    │  │ spawn     │
//！│      └─────────┘                                └────┬─────┘◀─┘           │
//！│                                                      │ HTTP                │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │ cyberintel-client │           │
//！│                                           └───────────────────┘           │
//！└────────────────────────────────────────────────────────────────────────────┘

//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含纯数据结构，不包含任何业务逻辑；
//! 所有状态变更都通过 Update 层来触发。
//!
//! 路由（哪个面板可见）、toast 队列、busy 状态这三个全局状态
//! 由 cyberintel-core 提供，App 直接持有它们的实例；
//! 各面板自己的输入缓冲与分析结果放在 state/ 下，一个面板一个模块。
//! 面板状态是相互独立的：慢请求在用户切换面板后返回时，
//! 只会写入自己面板的状态，不会污染当前激活的视图。

mod app;
mod focus;
mod navigation;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItem, NavigationState};
pub use state::{
    AssistantState, BreachState, DashboardState, PasswordLabState, PhishingState, SearchState,
    UrlScannerState,
};
