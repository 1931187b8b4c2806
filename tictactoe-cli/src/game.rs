//! 对局控制
//!
//! 持有权威棋盘，人类先手，电脑通过搜索引擎应对

use tictactoe_ai::{AiEngine, Decision, SearchAlgorithm, SearchStats};
use tictactoe_core::{apply_human_move, is_terminal, Board, Utility};

use crate::error::GameError;

/// 一个回合的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// 人类落子后的棋盘
    pub human_board: Board,
    /// 电脑的应对（人类落子即终局时为 None）
    pub reply: Option<Decision>,
    /// 对局结果（未结束时为 None）
    pub outcome: Option<Utility>,
}

/// 一局游戏
pub struct GameSession {
    board: Board,
    engine: AiEngine,
    /// 整局累计的搜索统计
    total: SearchStats,
    turns: u32,
    outcome: Option<Utility>,
}

impl GameSession {
    /// 从空棋盘开始
    pub fn new(algorithm: SearchAlgorithm) -> Self {
        Self {
            board: Board::empty(),
            engine: AiEngine::from_algorithm(algorithm),
            total: SearchStats::default(),
            turns: 0,
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn algorithm(&self) -> SearchAlgorithm {
        self.engine.config().algorithm
    }

    pub fn outcome(&self) -> Option<Utility> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// 完成的回合数
    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn total_stats(&self) -> SearchStats {
        self.total
    }

    /// 人类在 (row, col) 落子，随后电脑应对
    ///
    /// 落子被拒绝时棋盘保持不变
    pub fn play(&mut self, row: usize, col: usize) -> Result<TurnReport, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let human_board = apply_human_move(&self.board, row, col)?;
        self.board = human_board;
        self.turns += 1;

        if let Some(utility) = is_terminal(&human_board) {
            self.outcome = Some(utility);
            tracing::info!("对局结束（人类落子后）: {:?}", utility);
            return Ok(TurnReport {
                human_board,
                reply: None,
                outcome: self.outcome,
            });
        }

        let decision = self.engine.decide(&human_board)?;
        self.board = decision.board;
        self.total += decision.stats;
        self.outcome = is_terminal(&decision.board);

        tracing::debug!(
            "第 {} 回合: 本步展开 {} 个节点，累计 {}",
            self.turns,
            self.engine.nodes_searched(),
            self.total.nodes_expanded
        );
        if let Some(utility) = self.outcome {
            tracing::info!("对局结束（电脑落子后）: {:?}", utility);
        }

        Ok(TurnReport {
            human_board,
            reply: Some(decision),
            outcome: self.outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{MoveError, Notation, EMPTY_NOTATION};

    #[test]
    fn test_center_opening_turn() {
        let mut session = GameSession::new(SearchAlgorithm::Minimax);
        assert_eq!(Notation::to_string(session.board()), EMPTY_NOTATION);
        let report = session.play(1, 1).unwrap();

        assert_eq!(Notation::to_string(&report.human_board), ".../.X./...");
        let reply = report.reply.unwrap();
        assert_eq!(Notation::to_string(&reply.board), "0../.X./...");
        assert_eq!(reply.stats.nodes_expanded, 55_504);
        assert_eq!(report.outcome, None);

        assert_eq!(session.board(), &reply.board);
        assert_eq!(session.total_stats().nodes_expanded, 55_504);
        assert_eq!(session.turns(), 1);
    }

    #[test]
    fn test_rejected_move_leaves_board_unchanged() {
        let mut session = GameSession::new(SearchAlgorithm::AlphaBeta);
        session.play(1, 1).unwrap();
        let before = *session.board();

        assert_eq!(
            session.play(3, 0),
            Err(GameError::Move(MoveError::OutOfRange { row: 3, col: 0 }))
        );
        // 电脑已占 (0,0)
        assert_eq!(
            session.play(0, 0),
            Err(GameError::Move(MoveError::CellOccupied { row: 0, col: 0 }))
        );
        assert_eq!(session.board(), &before);
        assert_eq!(session.turns(), 1);
    }

    #[test]
    fn test_totals_accumulate_across_turns() {
        let mut session = GameSession::new(SearchAlgorithm::AlphaBeta);
        let first = session.play(0, 0).unwrap().reply.unwrap();
        let second = session.play(0, 1).unwrap().reply.unwrap();

        assert_eq!(
            session.total_stats().nodes_expanded,
            first.stats.nodes_expanded + second.stats.nodes_expanded
        );
        // 电脑必须堵住第一行
        assert_eq!(Notation::to_string(&second.board), "XX0/.0./...");
    }

    #[test]
    fn test_computer_win_ends_game() {
        let mut session = GameSession::new(SearchAlgorithm::AlphaBeta);
        session.play(0, 0).unwrap();
        session.play(0, 1).unwrap();
        // 人类没有堵副对角线
        let report = session.play(1, 0).unwrap();

        assert_eq!(
            Notation::to_string(&report.reply.unwrap().board),
            "XX0/X0./0.."
        );
        assert_eq!(report.outcome, Some(Utility::ComputerWin));
        assert!(session.is_over());
        assert_eq!(session.play(2, 2), Err(GameError::GameOver));
    }
}
