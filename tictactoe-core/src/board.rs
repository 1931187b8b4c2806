//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::CELL_COUNT;
use crate::mark::{Mark, Position};

/// 3x3 棋盘
///
/// 不可变值类型：所有“修改”都返回新的棋盘
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// 索引为 row * 3 + col
    cells: [Mark; CELL_COUNT],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    /// 从行优先的格子数组创建
    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// 获取指定位置的标记
    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.to_index()]
    }

    /// 返回在指定位置放上标记后的新棋盘
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Board {
        let mut cells = self.cells;
        cells[pos.to_index()] = mark;
        Board { cells }
    }

    /// 按行优先顺序遍历 (坐标, 标记)
    pub fn cells(&self) -> impl Iterator<Item = (Position, Mark)> + '_ {
        Position::all().map(move |pos| (pos, self.get(pos)))
    }

    /// 按行优先顺序返回所有空格
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells()
            .filter(|(_, mark)| mark.is_empty())
            .map(|(pos, _)| pos)
            .collect()
    }

    /// 统计某种标记的数量
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&m| m == mark).count()
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Mark::Empty)
    }

    /// 是否满足轮流落子的计数约束（人类先手）
    pub fn has_valid_turn_balance(&self) -> bool {
        let human = self.count(Mark::Human);
        let computer = self.count(Mark::Computer);
        human == computer || human == computer + 1
    }
}
