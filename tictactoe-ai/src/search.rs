//! 两种搜索共用的根节点处理

use tictactoe_core::Utility;

use crate::error::SearchError;
use crate::node::GameTreeNode;
use crate::stats::SearchStats;

/// 一次搜索的结果
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// 选中的子节点
    pub best: GameTreeNode,
    /// 根节点的回溯值
    pub value: Utility,
    /// 本次搜索的统计
    pub stats: SearchStats,
}

/// 根节点必须是非终局
pub(crate) fn ensure_non_terminal(root: &mut GameTreeNode) -> Result<(), SearchError> {
    match root.evaluate() {
        Some(utility) => Err(SearchError::InvalidCallOnTerminal { utility }),
        None => Ok(()),
    }
}

/// 按生成顺序取出第一个缓存值等于 value 的子节点
///
/// 被剪掉的子节点没有缓存值，不会被选中
pub(crate) fn take_first_optimal(
    mut root: GameTreeNode,
    value: Utility,
    stats: SearchStats,
) -> Result<SearchOutcome, SearchError> {
    let best = root
        .children()
        .iter()
        .position(|child| child.utility() == Some(value))
        .and_then(|index| root.take_child(index))
        .ok_or(SearchError::MissingBestMove { value })?;

    Ok(SearchOutcome { best, value, stats })
}
