//! 错误类型定义

use thiserror::Error;

/// 规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// 无效的落子：越界或目标格已被占用
    #[error("Invalid move: ({row}, {col})")]
    InvalidMove { row: usize, col: usize },

    /// 游戏已结束
    #[error("Game is already over")]
    GameOver,

    /// 无效的棋盘文本
    #[error("Invalid notation: {reason}")]
    InvalidNotation { reason: String },
}

impl RulesError {
    /// 是否属于"拒绝落子"（调用方无状态变化）
    pub fn is_rejected_move(&self) -> bool {
        matches!(self, RulesError::InvalidMove { .. } | RulesError::GameOver)
    }
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, RulesError>;
