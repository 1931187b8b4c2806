//! 棋盘常量定义

/// 棋盘边长（行数与列数）
pub const BOARD_SIZE: usize = 3;

/// 格子总数
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 人类玩家的显示符号
pub const HUMAN_SYMBOL: char = 'X';

/// 电脑玩家的显示符号
pub const COMPUTER_SYMBOL: char = '0';

/// 记法中的空格符号
pub const EMPTY_SYMBOL: char = '.';
