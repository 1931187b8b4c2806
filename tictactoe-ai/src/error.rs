//! 错误类型定义

use thiserror::Error;
use tictactoe_core::Utility;

/// 搜索错误
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// 在终局局面上调用搜索（调用方违反前置条件）
    #[error("Cannot decide a move on a terminal position (utility: {utility:?})")]
    InvalidCallOnTerminal { utility: Utility },

    /// 棋盘上双方棋子数不符合人类先手、轮流落子
    #[error("Board is not reachable by alternating play (humans: {humans}, computers: {computers})")]
    InvalidTurnBalance { humans: usize, computers: usize },

    /// 没有子节点的缓存值等于根节点的回溯值
    #[error("No successor carries the backed-up value {value:?}")]
    MissingBestMove { value: Utility },
}
