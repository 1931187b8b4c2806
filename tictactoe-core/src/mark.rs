//! 标记、玩家与坐标定义

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, COMPUTER_SYMBOL, EMPTY_SYMBOL, HUMAN_SYMBOL};

/// 格子上的标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// 空格
    #[default]
    Empty,
    /// 人类玩家（X，先手）
    Human,
    /// 电脑玩家（0，后手）
    Computer,
}

impl Mark {
    /// 是否为空格
    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }

    /// 获取记法字符
    pub fn to_char(&self) -> char {
        match self {
            Mark::Empty => EMPTY_SYMBOL,
            Mark::Human => HUMAN_SYMBOL,
            Mark::Computer => COMPUTER_SYMBOL,
        }
    }

    /// 从记法字符解析（电脑标记同时接受 `0` 与 `O`）
    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            EMPTY_SYMBOL => Some(Mark::Empty),
            'X' | 'x' => Some(Mark::Human),
            '0' | 'O' | 'o' => Some(Mark::Computer),
            _ => None,
        }
    }

    /// 获取落下该标记的玩家
    pub fn owner(&self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Human => Some(Player::Min),
            Mark::Computer => Some(Player::Max),
        }
    }
}

/// 搜索中的玩家角色
///
/// 固定映射：Max 为电脑（最大化效用），Min 为人类（最小化效用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// 最大化方（电脑）
    Max,
    /// 最小化方（人类）
    Min,
}

impl Player {
    /// 获取对手
    pub fn opponent(&self) -> Player {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }

    /// 获取该玩家落下的标记
    pub fn mark(&self) -> Mark {
        match self {
            Player::Max => Mark::Computer,
            Player::Min => Mark::Human,
        }
    }
}

/// 棋盘坐标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 行 (0-2)
    pub row: usize,
    /// 列 (0-2)
    pub col: usize,
}

impl Position {
    /// 创建新坐标，越界返回 None
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// 创建新坐标（不检查边界，内部使用）
    pub const fn new_unchecked(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// 转换为行优先索引
    pub fn to_index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// 按行优先顺序遍历全部坐标
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new_unchecked(row, col)))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
