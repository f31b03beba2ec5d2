//! 棋盘文本表示法
//!
//! 格式：三行以 `/` 分隔，`X`/`O` 表示棋子，`.` 表示空位。
//!
//! 示例：
//! `XO./.X./..O`

use crate::constants::BOARD_SIZE;
use crate::error::{Result, RulesError};
use crate::grid::Grid;
use crate::mark::{Mark, Position};

/// 文本表示法处理
pub struct Notation;

impl Notation {
    /// 解析文本为棋盘
    pub fn parse(text: &str) -> Result<Grid> {
        let rows: Vec<&str> = text.trim().split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(RulesError::InvalidNotation {
                reason: format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        let mut grid = Grid::empty();
        for (row_idx, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(RulesError::InvalidNotation {
                    reason: format!(
                        "Row {} has {} columns, expected {}",
                        row_idx,
                        chars.len(),
                        BOARD_SIZE
                    ),
                });
            }

            for (col_idx, c) in chars.into_iter().enumerate() {
                let cell = match c {
                    '.' => None,
                    c => match Mark::from_char(c) {
                        Some(mark) => Some(mark),
                        None => {
                            return Err(RulesError::InvalidNotation {
                                reason: format!("Invalid cell character: {}", c),
                            })
                        }
                    },
                };
                grid.set(Position::new_unchecked(row_idx as u8, col_idx as u8), cell);
            }
        }

        Ok(grid)
    }

    /// 将棋盘转换为文本
    pub fn to_string(grid: &Grid) -> String {
        grid.rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', |mark| mark.to_char()))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}
