//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘等输入事件翻译成 Message，自身不改任何状态。
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//! 分发顺序（handler.rs）：
//!     1. 只处理 Press，忽略 Release / Repeat
//!     2. 搜索框展开时，按键优先被搜索框捕获
//!     3. 档案菜单打开时，任意确认/取消键都只是关闭它
//!     4. 全局快捷键（退出、刷新、浮层开关）
//!     5. 焦点位于导航面板 → 导航消息
//!     6. 焦点位于内容面板 → 按当前激活面板翻译成 ContentMessage
//!
//! 内容面板是文本输入为主的界面，所以除了少数 Alt 组合键之外，
//! 普通字符一律作为输入送给当前面板（'q'、'j'、'k' 不做全局键）。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
