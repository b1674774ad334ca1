//! 顶栏知识库搜索框状态

/// 知识库搜索框状态
///
/// open 为 true 时按键被搜索框捕获；Enter 提交并清空，Esc 关闭。
#[derive(Debug, Default)]
pub struct SearchState {
    /// 搜索框是否展开
    pub open: bool,
    /// 查询缓冲
    pub query: String,
}

impl SearchState {
    /// 创建新的搜索框状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 展开搜索框
    pub fn show(&mut self) {
        self.open = true;
    }

    /// 关闭并清空搜索框
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
    }
}
