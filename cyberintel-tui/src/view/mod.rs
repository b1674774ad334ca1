//! View 层：UI 渲染
//!
//! View 层只读取 Model，把状态投影成 ratatui 组件，不做任何修改。
//! 入口是 [`render`]，每轮主循环调用一次。

pub mod components;
mod layout;
pub mod pages;
pub mod theme;

pub use layout::render;
