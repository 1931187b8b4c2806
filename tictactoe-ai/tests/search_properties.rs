//! 搜索引擎整体性质测试
//!
//! 在所有可达局面上比较 Minimax 与 Alpha-Beta，并验证完美对弈结果

use std::collections::HashSet;

use tictactoe_ai::{decide, AiEngine, SearchAlgorithm};
use tictactoe_core::{apply_human_move, is_terminal, Board, Mark, MoveGenerator, Player, Utility};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// 从空棋盘出发（人类先手）收集所有可达的非终局局面及其落子方
fn reachable_positions() -> Vec<(Board, Player)> {
    let mut seen = HashSet::new();
    let mut stack = vec![(Board::empty(), Player::Min)];
    let mut result = Vec::new();

    while let Some((board, mover)) = stack.pop() {
        if !seen.insert(board) || is_terminal(&board).is_some() {
            continue;
        }
        result.push((board, mover));

        for (_, next) in MoveGenerator::successors(&board, mover) {
            stack.push((next, mover.opponent()));
        }
    }

    result
}

#[test]
fn test_reachable_position_count() {
    // 井字棋共有 5478 个合法局面，其中 958 个终局
    assert_eq!(reachable_positions().len(), 5478 - 958);
}

#[test]
fn test_alpha_beta_matches_minimax_everywhere() {
    init_tracing();

    let mut strictly_fewer = 0;
    let mut compared = 0;
    // 包括空棋盘在内的每个可达局面，双方都作为落子方比较一次
    for (board, _) in reachable_positions() {
        for mover in [Player::Min, Player::Max] {
            compared += 1;
            let minimax = decide(&board, mover, SearchAlgorithm::Minimax).unwrap();
            let alpha_beta = decide(&board, mover, SearchAlgorithm::AlphaBeta).unwrap();

            assert_eq!(
                minimax.value, alpha_beta.value,
                "value differs on {:?} ({:?} to move)",
                board, mover
            );
            assert_eq!(
                minimax.board, alpha_beta.board,
                "choice differs on {:?} ({:?} to move)",
                board, mover
            );
            assert!(
                alpha_beta.stats.nodes_expanded <= minimax.stats.nodes_expanded,
                "alpha-beta expanded more nodes on {:?} ({:?} to move)",
                board,
                mover
            );
            if alpha_beta.stats.nodes_expanded < minimax.stats.nodes_expanded {
                strictly_fewer += 1;
            }
        }
    }

    assert_eq!(compared, 2 * (5478 - 958));
    assert!(strictly_fewer > 0);
}

#[test]
fn test_chosen_board_differs_by_one_mover_mark() {
    for (board, mover) in reachable_positions() {
        if board.count(Mark::Empty) > 6 {
            continue;
        }
        let decision = decide(&board, mover, SearchAlgorithm::AlphaBeta).unwrap();

        let changed: Vec<_> = board
            .cells()
            .zip(decision.board.cells())
            .filter(|(before, after)| before != after)
            .collect();
        assert_eq!(changed.len(), 1);

        let ((_, before), (_, after)) = changed[0];
        assert_eq!(before, Mark::Empty);
        assert_eq!(after, mover.mark());
    }
}

#[test]
fn test_optimal_play_is_a_draw() {
    for algorithm in SearchAlgorithm::all() {
        let mut board = Board::empty();
        let mut mover = Player::Min;

        let outcome = loop {
            if let Some(utility) = is_terminal(&board) {
                break utility;
            }
            board = decide(&board, mover, *algorithm).unwrap().board;
            mover = mover.opponent();
        };

        assert_eq!(outcome, Utility::Draw, "{:?}", algorithm);
    }
}

/// 人类尝试所有走法，电脑用引擎应对，返回人类能达到的最好结果
fn best_human_result(board: Board, engine: &mut AiEngine) -> Utility {
    let mut best = Utility::ComputerWin;

    for pos in board.empty_positions() {
        let after_human = apply_human_move(&board, pos.row, pos.col).unwrap();
        let result = match is_terminal(&after_human) {
            Some(utility) => utility,
            None => {
                let after_computer = engine.decide(&after_human).unwrap().board;
                match is_terminal(&after_computer) {
                    Some(utility) => utility,
                    None => best_human_result(after_computer, engine),
                }
            }
        };
        best = best.min(result);
    }

    best
}

#[test]
fn test_computer_never_loses() {
    let mut engine = AiEngine::from_algorithm(SearchAlgorithm::AlphaBeta);
    assert_eq!(best_human_result(Board::empty(), &mut engine), Utility::Draw);
}

#[test]
fn test_center_opening_reaches_draw() {
    let mut engine = AiEngine::from_algorithm(SearchAlgorithm::Minimax);
    let board = apply_human_move(&Board::empty(), 1, 1).unwrap();

    let reply = engine.decide(&board).unwrap();
    assert_eq!(reply.value, Utility::Draw);

    // 电脑应对之后，人类无论怎么走都赢不了
    assert_eq!(best_human_result(reply.board, &mut engine), Utility::Draw);
}
