//! 错误类型定义

use thiserror::Error;

/// 落子错误
///
/// 均可恢复：棋盘是不可变值，被拒绝的落子不会改动原棋盘
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// 坐标超出 3x3 棋盘
    #[error("Position out of range: ({row}, {col}), expected values in [0, 2]")]
    OutOfRange { row: usize, col: usize },

    /// 目标格子已有标记
    #[error("Cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },
}

/// 记法解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// 无效的棋盘记法
    #[error("Invalid board notation: {reason}")]
    InvalidNotation { reason: String },
}
