//! 回合循环
//!
//! 对输入输出流泛型，终端运行时接 stdin/stdout，测试时接内存缓冲

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tictactoe_ai::{SearchAlgorithm, SearchStats};
use tictactoe_core::{MoveError, Utility};

use crate::error::GameError;
use crate::game::GameSession;
use crate::input::{parse_menu_choice, parse_move};
use crate::render::{describe_winning_line, render_board, result_banner};
use crate::settings::Settings;

/// 一局结束后的汇总
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub algorithm: SearchAlgorithm,
    /// 输入提前结束时为 None
    pub outcome: Option<Utility>,
    pub total: SearchStats,
    pub turns: u32,
}

/// 读取一行，输入结束返回 None
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("读取输入失败")?;
    Ok((read > 0).then_some(line))
}

/// 选择算法，输入结束时使用默认算法
fn choose_algorithm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    default: SearchAlgorithm,
) -> Result<SearchAlgorithm> {
    loop {
        writeln!(output, "Which Algorithm to use :")?;
        for (idx, algorithm) in SearchAlgorithm::all().iter().enumerate() {
            writeln!(output, "{}. {}", idx + 1, algorithm.display_name())?;
        }
        write!(output, "Please select [{}]: ", default.display_name())?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(default);
        };

        match parse_menu_choice(&line, default) {
            Ok(algorithm) => return Ok(algorithm),
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}

/// 运行一局游戏
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    settings: &Settings,
) -> Result<GameSummary> {
    let algorithm = choose_algorithm(&mut input, &mut output, settings.default_algorithm)?;
    tracing::info!("使用算法: {:?}", algorithm);

    let mut session = GameSession::new(algorithm);

    while !session.is_over() {
        write!(
            output,
            "\nPlease provide position(x,y) to mark 'X' (range [0-2][0-2]): "
        )?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            tracing::warn!("输入已结束，对局未完成");
            break;
        };

        let (row, col) = match parse_move(&line) {
            Ok(coords) => coords,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        let report = match session.play(row, col) {
            Ok(report) => report,
            Err(GameError::Move(MoveError::OutOfRange { .. })) => {
                writeln!(output, "Please provide a input in range [0-2] only")?;
                continue;
            }
            Err(GameError::Move(MoveError::CellOccupied { .. })) => {
                writeln!(output, "Block already occupied")?;
                continue;
            }
            Err(e) => return Err(e).context("对局异常终止"),
        };

        write!(output, "{}", render_board(&report.human_board))?;

        if let Some(reply) = report.reply {
            writeln!(output, "\nComputer plays :")?;
            write!(output, "{}", render_board(&reply.board))?;
            if settings.show_stats {
                writeln!(
                    output,
                    "States generated to decide this move : {}",
                    reply.stats.nodes_expanded
                )?;
            }
        }

        if let Some(outcome) = report.outcome {
            writeln!(output, "{}", result_banner(outcome))?;
            if let Some(line) = describe_winning_line(session.board()) {
                writeln!(output, "Winning line: {}", line)?;
            }
        }
    }

    let total = session.total_stats();
    writeln!(
        output,
        "Total number of states generated by {} : {}",
        session.algorithm().display_name(),
        total.nodes_expanded
    )?;

    Ok(GameSummary {
        algorithm,
        outcome: session.outcome(),
        total,
        turns: session.turns(),
    })
}

/// 将本局选择的算法记为下次的默认算法
///
/// 与已有默认值相同时不写文件，返回是否写入
pub fn remember_choice(settings: &Settings, summary: &GameSummary, path: &Path) -> Result<bool> {
    if summary.algorithm == settings.default_algorithm {
        return Ok(false);
    }

    let updated = Settings {
        default_algorithm: summary.algorithm,
        ..settings.clone()
    };
    updated.save_to(path)?;
    Ok(true)
}
