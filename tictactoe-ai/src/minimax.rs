//! Minimax 穷举搜索
//!
//! 深度优先遍历整棵博弈树，不剪枝

use std::time::Instant;

use tictactoe_core::{Player, Utility};

use crate::error::SearchError;
use crate::node::GameTreeNode;
use crate::search::{ensure_non_terminal, take_first_optimal, SearchOutcome};
use crate::stats::SearchStats;

/// Minimax 搜索
pub struct MinimaxSearch;

impl MinimaxSearch {
    /// 为非终局根节点选择最佳子节点
    ///
    /// 返回生成顺序中第一个回溯值等于根节点值的子节点
    pub fn decide(mut root: GameTreeNode) -> Result<SearchOutcome, SearchError> {
        let started = Instant::now();
        ensure_non_terminal(&mut root)?;

        let mut stats = SearchStats::default();
        let value = Self::value(&mut root, &mut stats);
        stats.elapsed = started.elapsed();

        take_first_optimal(root, value, stats)
    }

    /// 计算节点的博弈值（不选择走法）
    pub fn value(root: &mut GameTreeNode, stats: &mut SearchStats) -> Utility {
        match root.mover() {
            Player::Max => max_value(root, stats),
            Player::Min => min_value(root, stats),
        }
    }
}

fn max_value(node: &mut GameTreeNode, stats: &mut SearchStats) -> Utility {
    if let Some(utility) = node.evaluate() {
        return utility;
    }

    // 非终局节点至少有一个子节点，以最小效用起步等价于 -∞
    let mut v = Utility::HumanWin;
    for child in node.successors() {
        stats.record_expansion();
        let t = min_value(child, stats);
        child.set_utility(t);
        v = v.max(t);
    }
    v
}

fn min_value(node: &mut GameTreeNode, stats: &mut SearchStats) -> Utility {
    if let Some(utility) = node.evaluate() {
        return utility;
    }

    let mut v = Utility::ComputerWin;
    for child in node.successors() {
        stats.record_expansion();
        let t = max_value(child, stats);
        child.set_utility(t);
        v = v.min(t);
    }
    v
}
