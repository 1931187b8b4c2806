//! Alpha-Beta 剪枝搜索
//!
//! 与 Minimax 取值一致、选择规则一致，只是跳过不可能影响结果的分支

use std::time::Instant;

use tictactoe_core::{Player, Utility};

use crate::error::SearchError;
use crate::node::GameTreeNode;
use crate::search::{ensure_non_terminal, take_first_optimal, SearchOutcome};
use crate::stats::SearchStats;

/// 负无穷边界
const NEG_INFINITY: i32 = i32::MIN;

/// 正无穷边界
const INFINITY: i32 = i32::MAX;

/// Alpha-Beta 搜索
pub struct AlphaBetaSearch;

impl AlphaBetaSearch {
    /// 为非终局根节点选择最佳子节点
    ///
    /// 只在已缓存效用的子节点中查找，被剪掉的子节点不参与选择
    pub fn decide(mut root: GameTreeNode) -> Result<SearchOutcome, SearchError> {
        let started = Instant::now();
        ensure_non_terminal(&mut root)?;

        let mut stats = SearchStats::default();
        let value = Self::value(&mut root, &mut stats);
        stats.elapsed = started.elapsed();

        take_first_optimal(root, value, stats)
    }

    /// 以 (-∞, +∞) 窗口计算节点的博弈值
    pub fn value(root: &mut GameTreeNode, stats: &mut SearchStats) -> Utility {
        match root.mover() {
            Player::Max => max_value(root, NEG_INFINITY, INFINITY, stats),
            Player::Min => min_value(root, NEG_INFINITY, INFINITY, stats),
        }
    }
}

fn max_value(
    node: &mut GameTreeNode,
    mut alpha: i32,
    beta: i32,
    stats: &mut SearchStats,
) -> Utility {
    if let Some(utility) = node.evaluate() {
        return utility;
    }

    // 与边界比较之前 v 总会先被第一个子节点更新
    let mut v = Utility::HumanWin;
    for child in node.successors() {
        stats.record_expansion();
        let t = min_value(child, alpha, beta, stats);
        child.set_utility(t);
        v = v.max(t);

        // Beta 剪枝
        if v.score() >= beta {
            stats.record_cutoff();
            return v;
        }
        alpha = alpha.max(v.score());
    }
    v
}

fn min_value(
    node: &mut GameTreeNode,
    alpha: i32,
    mut beta: i32,
    stats: &mut SearchStats,
) -> Utility {
    if let Some(utility) = node.evaluate() {
        return utility;
    }

    let mut v = Utility::ComputerWin;
    for child in node.successors() {
        stats.record_expansion();
        let t = max_value(child, alpha, beta, stats);
        child.set_utility(t);
        v = v.min(t);

        // Alpha 剪枝
        if v.score() <= alpha {
            stats.record_cutoff();
            return v;
        }
        beta = beta.min(v.score());
    }
    v
}
