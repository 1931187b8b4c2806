//! 错误类型定义

use thiserror::Error;
use tictactoe_ai::SearchError;
use tictactoe_core::MoveError;

/// 输入解析错误（可恢复，重新提示即可）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// 坐标个数不对
    #[error("Expected two numbers separated by a space, got {count} value(s)")]
    WrongArity { count: usize },

    /// 不是数字
    #[error("Not a number: {token}")]
    NotANumber { token: String },

    /// 无效的菜单选项
    #[error("Unknown menu choice: {choice}")]
    UnknownChoice { choice: String },
}

/// 对局错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 落子被拒绝
    #[error(transparent)]
    Move(#[from] MoveError),

    /// 搜索失败
    #[error("Search failed: {0}")]
    Search(#[from] SearchError),

    /// 对局已结束
    #[error("Game is already over")]
    GameOver,
}
