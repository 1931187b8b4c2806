//! 搜索统计

use std::ops::AddAssign;
use std::time::Duration;

/// 单次搜索的统计信息
///
/// 每次 `decide` 调用独立计数，通过 `&mut` 在递归中传递
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// 展开的节点数（每访问一个子节点计一次）
    pub nodes_expanded: u64,
    /// 剪枝次数（仅 Alpha-Beta）
    pub cutoffs: u64,
    /// 耗时
    pub elapsed: Duration,
}

impl SearchStats {
    /// 记录一次节点展开
    #[inline]
    pub fn record_expansion(&mut self) {
        self.nodes_expanded += 1;
    }

    /// 记录一次剪枝
    #[inline]
    pub fn record_cutoff(&mut self) {
        self.cutoffs += 1;
    }
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.nodes_expanded += other.nodes_expanded;
        self.cutoffs += other.cutoffs;
        self.elapsed += other.elapsed;
    }
}
