//! 落子与后继棋盘生成

use crate::board::Board;
use crate::error::MoveError;
use crate::mark::{Mark, Player, Position};
use crate::terminal::evaluate;

/// 人类落子
///
/// 成功时返回新棋盘；失败时原棋盘不受影响
pub fn apply_human_move(board: &Board, row: usize, col: usize) -> Result<Board, MoveError> {
    let pos = Position::new(row, col).ok_or(MoveError::OutOfRange { row, col })?;

    if !board.get(pos).is_empty() {
        return Err(MoveError::CellOccupied { row, col });
    }

    Ok(board.with_mark(pos, Mark::Human))
}

/// 后继棋盘生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成指定玩家的所有后继棋盘（行优先顺序）
    ///
    /// 终局棋盘没有后继
    pub fn successors(board: &Board, player: Player) -> Vec<(Position, Board)> {
        if evaluate(board).is_some() {
            return Vec::new();
        }

        Self::expand(board, player)
    }

    /// 在每个空格落子，不做终局判定
    ///
    /// 供已知棋盘非终局的调用方使用
    pub fn expand(board: &Board, player: Player) -> Vec<(Position, Board)> {
        let mark = player.mark();
        board
            .empty_positions()
            .into_iter()
            .map(|pos| (pos, board.with_mark(pos, mark)))
            .collect()
    }
}
