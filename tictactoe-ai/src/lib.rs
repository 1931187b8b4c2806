//! 井字棋搜索引擎
//!
//! 包含:
//! - 博弈树节点（惰性生成、缓存子节点与效用值）
//! - Minimax 穷举搜索
//! - Alpha-Beta 剪枝搜索
//! - 搜索统计

mod alphabeta;
mod engine;
mod error;
mod minimax;
mod node;
mod search;
mod stats;

pub use alphabeta::AlphaBetaSearch;
pub use engine::{decide, AiConfig, AiEngine, Decision, SearchAlgorithm};
pub use error::SearchError;
pub use minimax::MinimaxSearch;
pub use node::GameTreeNode;
pub use search::SearchOutcome;
pub use stats::SearchStats;
