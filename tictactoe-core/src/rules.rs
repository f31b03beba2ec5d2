//! 规则引擎
//!
//! 无状态：所有函数都显式接收棋盘与标记。胜负由 8 条连线判定，
//! 每条连线都通过 [`is_line_full`] 检查。

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, LINE_COUNT};
use crate::error::{Result, RulesError};
use crate::grid::{Cell, Grid};
use crate::mark::{Mark, Position};

const fn pos(row: u8, col: u8) -> Position {
    Position::new_unchecked(row, col)
}

/// 所有连线，按判定顺序排列：
/// 主对角线、副对角线，然后对每个下标 i 依次为第 i 行、第 i 列。
///
/// 同时存在多条完整连线时（合法交替落子不会出现），按此顺序报告第一条。
pub const LINES: [[Position; 3]; LINE_COUNT] = [
    [pos(0, 0), pos(1, 1), pos(2, 2)],
    [pos(0, 2), pos(1, 1), pos(2, 0)],
    [pos(0, 0), pos(0, 1), pos(0, 2)],
    [pos(0, 0), pos(1, 0), pos(2, 0)],
    [pos(1, 0), pos(1, 1), pos(1, 2)],
    [pos(0, 1), pos(1, 1), pos(2, 1)],
    [pos(2, 0), pos(2, 1), pos(2, 2)],
    [pos(0, 2), pos(1, 2), pos(2, 2)],
];

/// 获胜连线
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    pub cells: [Position; 3],
}

impl WinningLine {
    pub fn new(cells: [Position; 3]) -> Self {
        Self { cells }
    }

    /// 是否包含指定位置
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// 3x3 掩码，恰好标记构成连线的三个格子
    pub fn mask(&self) -> [[bool; BOARD_SIZE]; BOARD_SIZE] {
        let mut mask = [[false; BOARD_SIZE]; BOARD_SIZE];
        for cell in &self.cells {
            mask[cell.row as usize][cell.col as usize] = true;
        }
        mask
    }
}

/// 局面结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// 对局进行中
    InProgress,
    /// 一方连成一线
    Win { mark: Mark, line: WinningLine },
    /// 棋盘已满且无人连线
    Tie,
}

impl Outcome {
    /// 是否终局
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// 获胜方
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// 获胜连线掩码
    pub fn winning_mask(&self) -> Option<[[bool; BOARD_SIZE]; BOARD_SIZE]> {
        match self {
            Outcome::Win { line, .. } => Some(line.mask()),
            _ => None,
        }
    }
}

/// 三个格子是否相同且非空
pub fn is_line_full(a: Cell, b: Cell, c: Cell) -> bool {
    a.is_some() && a == b && b == c
}

/// 判定局面：先找完整连线，否则根据剩余空位判定和棋或进行中
pub fn evaluate(grid: &Grid) -> Outcome {
    for cells in LINES {
        let [a, b, c] = cells.map(|p| grid.get(p));
        if is_line_full(a, b, c) {
            if let Some(mark) = a {
                return Outcome::Win {
                    mark,
                    line: WinningLine::new(cells),
                };
            }
        }
    }

    if grid.open_count() == 0 {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}

/// 落子：越界或目标格非空时返回 `InvalidMove`，棋盘保持不变
pub fn apply_move(grid: &mut Grid, row: usize, col: usize, mark: Mark) -> Result<()> {
    match Position::new(row, col) {
        Some(pos) if grid.is_open(pos) => {
            grid.set(pos, Some(mark));
            Ok(())
        }
        _ => Err(RulesError::InvalidMove { row, col }),
    }
}
