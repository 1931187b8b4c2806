//! 紧凑棋盘记法
//!
//! 格式：三行自上而下，以 `/` 分隔，`X` 为人类，`0`（或 `O`）为电脑，`.` 为空格
//!
//! 示例：
//! `X.0/.X./...`

use crate::board::Board;
use crate::constants::{BOARD_SIZE, CELL_COUNT};
use crate::error::NotationError;
use crate::mark::Mark;

/// 空棋盘记法
pub const EMPTY_NOTATION: &str = ".../.../...";

/// 棋盘记法处理
pub struct Notation;

impl Notation {
    /// 解析记法字符串为棋盘
    pub fn parse(notation: &str) -> Result<Board, NotationError> {
        let notation = notation.trim();
        if notation.is_empty() {
            return Err(NotationError::InvalidNotation {
                reason: "Empty notation string".to_string(),
            });
        }

        let rows: Vec<&str> = notation.split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(NotationError::InvalidNotation {
                reason: format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        let mut cells = [Mark::Empty; CELL_COUNT];
        for (row_idx, row) in rows.iter().enumerate() {
            let marks = row
                .chars()
                .map(|c| {
                    Mark::from_char(c).ok_or_else(|| NotationError::InvalidNotation {
                        reason: format!("Invalid mark character: {}", c),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            if marks.len() != BOARD_SIZE {
                return Err(NotationError::InvalidNotation {
                    reason: format!(
                        "Row {} has {} columns, expected {}",
                        row_idx,
                        marks.len(),
                        BOARD_SIZE
                    ),
                });
            }

            cells[row_idx * BOARD_SIZE..(row_idx + 1) * BOARD_SIZE].copy_from_slice(&marks);
        }

        Ok(Board::from_cells(cells))
    }

    /// 将棋盘转换为记法字符串
    pub fn to_string(board: &Board) -> String {
        let mut rows = Vec::with_capacity(BOARD_SIZE);
        let mut row = String::with_capacity(BOARD_SIZE);

        for (pos, mark) in board.cells() {
            row.push(mark.to_char());
            if pos.col == BOARD_SIZE - 1 {
                rows.push(std::mem::take(&mut row));
            }
        }

        rows.join("/")
    }
}
