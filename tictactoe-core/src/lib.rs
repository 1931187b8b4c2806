//! 井字棋核心类型库
//!
//! 包含:
//! - 标记、玩家、坐标等基础数据结构
//! - 不可变棋盘
//! - 终局判定与效用值
//! - 落子与后继棋盘生成
//! - 紧凑棋盘记法

mod board;
mod constants;
mod error;
mod mark;
mod moves;
mod notation;
mod terminal;

pub use board::Board;
pub use constants::*;
pub use error::{MoveError, NotationError};
pub use mark::{Mark, Player, Position};
pub use moves::{apply_human_move, MoveGenerator};
pub use notation::{Notation, EMPTY_NOTATION};
pub use terminal::{evaluate, is_terminal, winning_line, Utility, LINES};
