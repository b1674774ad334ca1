//! 密码实验室面板状态

use cyberintel_core::PasswordReport;

/// 密码实验室面板状态
///
/// 实时路径：每次编辑都发出一个携带当前完整输入的请求，并使 `seq` 自增；
/// 只有 seq 与最新编辑一致的完成消息才会被渲染（last-response-wins），
/// 过期的在途响应被直接丢弃。清空输入同样使 seq 自增，
/// 使得旧响应无法让已隐藏的结果区复活。
#[derive(Debug, Default)]
pub struct PasswordLabState {
    /// 输入缓冲
    pub input: String,
    /// 是否以掩码显示输入
    pub masked: bool,
    /// 最近一次渲染的分析结果
    pub report: Option<PasswordReport>,
    /// 实时请求序号，单调递增
    pub seq: u64,
}

impl PasswordLabState {
    /// 创建新的面板状态（默认掩码显示）
    pub fn new() -> Self {
        Self {
            masked: true,
            ..Self::default()
        }
    }

    /// 记录一次新的编辑，返回该次编辑对应的请求序号
    pub fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    /// 判断一个完成消息是否仍然是最新的
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.seq
    }
}
