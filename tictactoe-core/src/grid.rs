//! 棋盘

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT};
use crate::mark::{Mark, Position};

/// 格子：None 表示空
pub type Cell = Option<Mark>;

/// 3x3 棋盘，索引为 row * 3 + col
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Grid {
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// 从行数组创建
    pub fn from_rows(rows: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut grid = Self::empty();
        for pos in Position::all() {
            grid.set(pos, rows[pos.row as usize][pos.col as usize]);
        }
        grid
    }

    /// 获取指定位置的格子
    pub fn get(&self, pos: Position) -> Cell {
        if pos.is_valid() {
            self.cells[pos.to_index()]
        } else {
            None
        }
    }

    /// 设置指定位置的格子（不检查规则）
    pub fn set(&mut self, pos: Position, cell: Cell) {
        if pos.is_valid() {
            self.cells[pos.to_index()] = cell;
        }
    }

    /// 指定位置是否为空
    pub fn is_open(&self, pos: Position) -> bool {
        pos.is_valid() && self.cells[pos.to_index()].is_none()
    }

    /// 所有空位（行优先顺序）
    pub fn open_positions(&self) -> Vec<Position> {
        Position::all().filter(|pos| self.is_open(*pos)).collect()
    }

    /// 空位数量
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        self.open_count() == 0
    }

    /// 是否为空棋盘
    pub fn is_empty(&self) -> bool {
        self.open_count() == CELL_COUNT
    }

    /// 行数组快照
    pub fn rows(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[None; BOARD_SIZE]; BOARD_SIZE];
        for pos in Position::all() {
            rows[pos.row as usize][pos.col as usize] = self.get(pos);
        }
        rows
    }

    /// 统计某一方的棋子数
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|cell| **cell == Some(mark)).count()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE as u8 {
            let line: Vec<String> = (0..BOARD_SIZE as u8)
                .map(|col| match self.get(Position::new_unchecked(row, col)) {
                    Some(mark) => mark.to_char().to_string(),
                    None => ".".to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid() {
        let grid = Grid::empty();
        assert!(grid.is_empty());
        assert_eq!(grid.open_count(), 9);
        assert_eq!(grid.open_positions().len(), 9);
        assert!(!grid.is_full());
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::empty();
        let pos = Position::new_unchecked(1, 2);
        grid.set(pos, Some(Mark::O));

        assert_eq!(grid.get(pos), Some(Mark::O));
        assert!(!grid.is_open(pos));
        assert_eq!(grid.open_count(), 8);
        assert_eq!(grid.count(Mark::O), 1);
        assert_eq!(grid.rows()[1][2], Some(Mark::O));
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut grid = Grid::empty();
        grid.set(Position::new_unchecked(3, 0), Some(Mark::X));
        assert!(grid.is_empty());
        assert_eq!(grid.get(Position::new_unchecked(0, 7)), None);
    }

    #[test]
    fn test_from_rows() {
        let rows = [
            [Some(Mark::X), None, None],
            [None, Some(Mark::O), None],
            [None, None, Some(Mark::X)],
        ];
        let grid = Grid::from_rows(rows);
        assert_eq!(grid.rows(), rows);
        assert_eq!(grid.open_positions()[0], Position::new_unchecked(0, 1));
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::empty();
        grid.set(Position::new_unchecked(0, 0), Some(Mark::X));
        grid.set(Position::new_unchecked(2, 1), Some(Mark::O));
        assert_eq!(grid.to_string(), "X . .\n. . .\n. O .\n");
    }
}
