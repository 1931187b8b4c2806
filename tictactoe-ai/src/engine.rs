//! 搜索引擎入口
//!
//! 以棋盘和落子方构建根节点，按配置的算法选出下一步棋盘

use serde::{Deserialize, Serialize};
use tictactoe_core::{Board, Mark, Notation, Player, Utility};
use tracing::{debug, trace};

use crate::alphabeta::AlphaBetaSearch;
use crate::error::SearchError;
use crate::minimax::MinimaxSearch;
use crate::node::GameTreeNode;
use crate::search::SearchOutcome;
use crate::stats::SearchStats;

/// 搜索算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SearchAlgorithm {
    /// 普通 Minimax
    #[default]
    Minimax,
    /// Alpha-Beta 剪枝
    AlphaBeta,
}

impl SearchAlgorithm {
    /// 显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            SearchAlgorithm::Minimax => "Regular Minimax",
            SearchAlgorithm::AlphaBeta => "Minimax using alpha-beta pruning",
        }
    }

    /// 所有选项
    pub fn all() -> &'static [SearchAlgorithm] {
        &[SearchAlgorithm::Minimax, SearchAlgorithm::AlphaBeta]
    }

    /// 对节点运行搜索
    pub fn decide_node(&self, root: GameTreeNode) -> Result<SearchOutcome, SearchError> {
        match self {
            SearchAlgorithm::Minimax => MinimaxSearch::decide(root),
            SearchAlgorithm::AlphaBeta => AlphaBetaSearch::decide(root),
        }
    }
}

/// 一次决策的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// 选中的后继棋盘
    pub board: Board,
    /// 根节点的回溯值
    pub value: Utility,
    /// 本次搜索的统计
    pub stats: SearchStats,
}

/// 以 mover 为落子方在 board 上搜索下一步
///
/// 棋盘必须是人类先手轮流落子可达的局面
pub fn decide(
    board: &Board,
    mover: Player,
    algorithm: SearchAlgorithm,
) -> Result<Decision, SearchError> {
    if !board.has_valid_turn_balance() {
        return Err(SearchError::InvalidTurnBalance {
            humans: board.count(Mark::Human),
            computers: board.count(Mark::Computer),
        });
    }

    let root = GameTreeNode::new(*board, mover);
    let SearchOutcome { best, value, stats } = algorithm.decide_node(root)?;

    debug!(
        "{:?} search: nodes={}, cutoffs={}, value={:?}, elapsed={:?}",
        algorithm, stats.nodes_expanded, stats.cutoffs, value, stats.elapsed
    );
    trace!(
        "{} -> {}",
        Notation::to_string(board),
        Notation::to_string(best.board())
    );

    Ok(Decision {
        board: *best.board(),
        value,
        stats,
    })
}

/// AI 配置
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    pub algorithm: SearchAlgorithm,
}

impl AiConfig {
    pub fn new(algorithm: SearchAlgorithm) -> Self {
        Self { algorithm }
    }
}

/// AI 引擎
///
/// 电脑固定为 Max 方
pub struct AiEngine {
    config: AiConfig,
    last_stats: SearchStats,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            last_stats: SearchStats::default(),
        }
    }

    /// 从算法创建
    pub fn from_algorithm(algorithm: SearchAlgorithm) -> Self {
        Self::new(AiConfig::new(algorithm))
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 为电脑选择下一步
    pub fn decide(&mut self, board: &Board) -> Result<Decision, SearchError> {
        let decision = decide(board, Player::Max, self.config.algorithm)?;
        self.last_stats = decision.stats;
        Ok(decision)
    }

    /// 上一次搜索展开的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.last_stats.nodes_expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::apply_human_move;

    #[test]
    fn test_decide_after_center_opening() {
        let board = apply_human_move(&Board::empty(), 1, 1).unwrap();

        let minimax = decide(&board, Player::Max, SearchAlgorithm::Minimax).unwrap();
        assert_eq!(Notation::to_string(&minimax.board), "0../.X./...");
        assert_eq!(minimax.value, Utility::Draw);
        assert_eq!(minimax.stats.nodes_expanded, 55_504);

        let alpha_beta = decide(&board, Player::Max, SearchAlgorithm::AlphaBeta).unwrap();
        assert_eq!(alpha_beta.board, minimax.board);
        assert_eq!(alpha_beta.value, minimax.value);
        assert_eq!(alpha_beta.stats.nodes_expanded, 2_315);
    }

    #[test]
    fn test_decide_for_min_mover() {
        // 电脑在副对角线上差一子，人类必须堵 (2,0)
        let board = Notation::parse("XX0/.0./...").unwrap();

        let minimax = decide(&board, Player::Min, SearchAlgorithm::Minimax).unwrap();
        assert_eq!(Notation::to_string(&minimax.board), "XX0/.0./X..");
        assert_eq!(minimax.value, Utility::Draw);
        assert_eq!(minimax.stats.nodes_expanded, 197);

        let alpha_beta = decide(&board, Player::Min, SearchAlgorithm::AlphaBeta).unwrap();
        assert_eq!(alpha_beta.board, minimax.board);
        assert_eq!(alpha_beta.stats.nodes_expanded, 63);
    }

    #[test]
    fn test_engine_tracks_last_stats() {
        let mut engine = AiEngine::from_algorithm(SearchAlgorithm::AlphaBeta);
        assert_eq!(engine.nodes_searched(), 0);

        let board = apply_human_move(&Board::empty(), 0, 0).unwrap();
        let decision = engine.decide(&board).unwrap();

        assert_eq!(Notation::to_string(&decision.board), "X../.0./...");
        assert_eq!(engine.nodes_searched(), 2_337);
        assert_eq!(engine.nodes_searched(), decision.stats.nodes_expanded);
    }

    #[test]
    fn test_decide_rejects_unbalanced_board() {
        // 电脑多下了一子
        let board = Notation::parse("0../.../...").unwrap();
        assert_eq!(
            decide(&board, Player::Min, SearchAlgorithm::Minimax),
            Err(SearchError::InvalidTurnBalance {
                humans: 0,
                computers: 1
            })
        );

        // 人类多下了一子
        let board = Notation::parse("XX./.../...").unwrap();
        let mut engine = AiEngine::from_algorithm(SearchAlgorithm::AlphaBeta);
        assert_eq!(
            engine.decide(&board),
            Err(SearchError::InvalidTurnBalance {
                humans: 2,
                computers: 0
            })
        );
        assert_eq!(engine.nodes_searched(), 0);
    }

    #[test]
    fn test_config_serde() {
        let config = AiConfig::new(SearchAlgorithm::AlphaBeta);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"algorithm":"AlphaBeta"}"#);
        let restored: AiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
