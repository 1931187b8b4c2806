//! 棋盘文本输出

use tictactoe_core::{winning_line, Board, Mark, Utility, BOARD_SIZE};

/// 逐行输出棋盘，空格显示为空白
pub fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE * 2 + 1));

    for (pos, mark) in board.cells() {
        out.push(match mark {
            Mark::Empty => ' ',
            other => other.to_char(),
        });
        out.push(' ');
        if pos.col == BOARD_SIZE - 1 {
            out.push('\n');
        }
    }

    out
}

/// 对局结果横幅
pub fn result_banner(utility: Utility) -> &'static str {
    match utility {
        Utility::Draw => "========== Tie ===========",
        Utility::HumanWin => "========== Human wins =========",
        Utility::ComputerWin => "========== Computer wins =========",
    }
}

/// 描述获胜连线，平局返回 None
pub fn describe_winning_line(board: &Board) -> Option<String> {
    winning_line(board).map(|(line, _)| {
        line.iter()
            .map(|pos| pos.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    })
}
