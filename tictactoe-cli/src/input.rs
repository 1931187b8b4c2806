//! 输入解析

use tictactoe_ai::SearchAlgorithm;

use crate::error::InputError;

/// 解析 `"row col"` 形式的落子输入
///
/// 只检查格式，坐标范围由落子时检查
pub fn parse_move(line: &str) -> Result<(usize, usize), InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(InputError::WrongArity {
            count: tokens.len(),
        });
    }

    let parse = |token: &str| {
        token.parse::<usize>().map_err(|_| InputError::NotANumber {
            token: token.to_string(),
        })
    };

    Ok((parse(tokens[0])?, parse(tokens[1])?))
}

/// 解析算法菜单选项，空输入使用默认算法
pub fn parse_menu_choice(
    line: &str,
    default: SearchAlgorithm,
) -> Result<SearchAlgorithm, InputError> {
    match line.trim() {
        "" => Ok(default),
        "1" => Ok(SearchAlgorithm::Minimax),
        "2" => Ok(SearchAlgorithm::AlphaBeta),
        other => Err(InputError::UnknownChoice {
            choice: other.to_string(),
        }),
    }
}
