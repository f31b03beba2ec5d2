//! 规则常量定义

use crate::mark::Mark;

/// 棋盘边长（行数 = 列数）
pub const BOARD_SIZE: usize = 3;

/// 格子总数
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 连线总数（3 行 + 3 列 + 2 条对角线）
pub const LINE_COUNT: usize = 8;

/// 先手标记
pub const FIRST_MARK: Mark = Mark::X;
