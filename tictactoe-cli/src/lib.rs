//! 井字棋终端对局
//!
//! 包含:
//! - 设置加载与保存
//! - 输入解析
//! - 棋盘输出
//! - 对局控制与回合循环

pub mod app;
pub mod error;
pub mod game;
pub mod input;
pub mod render;
pub mod settings;

pub use app::{remember_choice, run, GameSummary};
pub use error::{GameError, InputError};
pub use game::{GameSession, TurnReport};
pub use settings::{LogLevel, Settings};
