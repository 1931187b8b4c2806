//! 终局判定
//!
//! 依次检查 3 行、3 列、2 条对角线是否三子相连，再判断是否平局

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::mark::{Mark, Position};

/// 终局效用值
///
/// 排序与数值一致：HumanWin (-1) < Draw (0) < ComputerWin (+1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Utility {
    /// 人类获胜 (-1)
    HumanWin,
    /// 平局 (0)
    Draw,
    /// 电脑获胜 (+1)
    ComputerWin,
}

impl Utility {
    /// 数值形式
    pub fn score(&self) -> i32 {
        match self {
            Utility::HumanWin => -1,
            Utility::Draw => 0,
            Utility::ComputerWin => 1,
        }
    }

    /// 连成一线的标记对应的效用
    fn for_line(mark: Mark) -> Option<Utility> {
        match mark {
            Mark::Human => Some(Utility::HumanWin),
            Mark::Computer => Some(Utility::ComputerWin),
            Mark::Empty => None,
        }
    }
}

const fn pos(row: usize, col: usize) -> Position {
    Position::new_unchecked(row, col)
}

/// 全部 8 条连线，顺序为行、列、对角线
pub const LINES: [[Position; 3]; 8] = [
    [pos(0, 0), pos(0, 1), pos(0, 2)],
    [pos(1, 0), pos(1, 1), pos(1, 2)],
    [pos(2, 0), pos(2, 1), pos(2, 2)],
    [pos(0, 0), pos(1, 0), pos(2, 0)],
    [pos(0, 1), pos(1, 1), pos(2, 1)],
    [pos(0, 2), pos(1, 2), pos(2, 2)],
    [pos(0, 0), pos(1, 1), pos(2, 2)],
    [pos(0, 2), pos(1, 1), pos(2, 0)],
];

/// 查找第一条三子相连的线
pub fn winning_line(board: &Board) -> Option<([Position; 3], Mark)> {
    LINES.iter().find_map(|line| {
        let first = board.get(line[0]);
        if !first.is_empty() && line[1..].iter().all(|&p| board.get(p) == first) {
            Some((*line, first))
        } else {
            None
        }
    })
}

/// 计算终局效用，非终局返回 None
pub fn evaluate(board: &Board) -> Option<Utility> {
    if let Some((_, mark)) = winning_line(board) {
        return Utility::for_line(mark);
    }

    if board.is_full() {
        Some(Utility::Draw)
    } else {
        None
    }
}

/// 对外接口：判断棋盘是否终局
pub fn is_terminal(board: &Board) -> Option<Utility> {
    evaluate(board)
}
