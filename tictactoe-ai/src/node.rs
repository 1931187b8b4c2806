//! 博弈树节点
//!
//! 节点独占其子节点（严格树结构），生命周期限定在一次 `decide` 调用内

use tictactoe_core::{evaluate, Board, MoveGenerator, Player, Utility};

/// 博弈树节点
#[derive(Debug, Clone)]
pub struct GameTreeNode {
    /// 在此棋盘上轮到落子的一方
    mover: Player,
    /// 棋盘
    board: Board,
    /// 效用值（终局效用或回溯值），设置后不再重新计算
    utility: Option<Utility>,
    /// 终局判定缓存
    terminal: Option<bool>,
    /// 子节点缓存（行优先生成顺序）
    children: Option<Vec<GameTreeNode>>,
}

impl GameTreeNode {
    /// 创建新节点
    pub fn new(board: Board, mover: Player) -> Self {
        Self {
            mover,
            board,
            utility: None,
            terminal: None,
            children: None,
        }
    }

    pub fn mover(&self) -> Player {
        self.mover
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 已缓存的效用值
    pub fn utility(&self) -> Option<Utility> {
        self.utility
    }

    /// 记录回溯值（已有值时保持不变）
    pub fn set_utility(&mut self, utility: Utility) {
        self.utility.get_or_insert(utility);
    }

    /// 终局判定，结果缓存在节点上
    ///
    /// 终局返回其效用，非终局返回 None
    pub fn evaluate(&mut self) -> Option<Utility> {
        match self.terminal {
            Some(true) => self.utility,
            Some(false) => None,
            None => {
                let outcome = evaluate(&self.board);
                self.terminal = Some(outcome.is_some());
                if let Some(utility) = outcome {
                    self.set_utility(utility);
                }
                outcome
            }
        }
    }

    /// 生成子节点（只计算一次）
    ///
    /// 终局节点没有子节点，终局判定复用节点上的缓存
    pub fn successors(&mut self) -> &mut [GameTreeNode] {
        if self.children.is_none() {
            let children = if self.evaluate().is_some() {
                Vec::new()
            } else {
                let opponent = self.mover.opponent();
                MoveGenerator::expand(&self.board, self.mover)
                    .into_iter()
                    .map(|(_, next)| GameTreeNode::new(next, opponent))
                    .collect()
            };
            self.children = Some(children);
        }

        self.children.get_or_insert_with(Vec::new).as_mut_slice()
    }


    /// 已生成的子节点，未展开时为空
    pub fn children(&self) -> &[GameTreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// 取出第 index 个子节点的所有权
    pub(crate) fn take_child(&mut self, index: usize) -> Option<GameTreeNode> {
        let children = self.children.as_mut()?;
        if index < children.len() {
            Some(children.swap_remove(index))
        } else {
            None
        }
    }
}
