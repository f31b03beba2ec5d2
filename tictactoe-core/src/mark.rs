//! 棋子标记与棋盘位置

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;

/// 棋子标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// X（先手）
    X,
    /// O（后手）
    O,
}

impl Mark {
    /// 获取对方标记
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// 获取显示字符
    pub fn to_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// 从字符解析（大小写均可）
    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'x' | 'X' => Some(Mark::X),
            'o' | 'O' => Some(Mark::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// 棋盘位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 行 (0-2)
    pub row: u8,
    /// 列 (0-2)
    pub col: u8,
}

impl Position {
    /// 创建新位置，越界返回 None
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// 创建新位置（不检查边界，内部使用）
    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 检查位置是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// 转换为数组索引（行优先）
    pub fn to_index(&self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// 按行优先顺序遍历所有位置
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Position::new_unchecked(row, col)))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_mark_char() {
        assert_eq!(Mark::X.to_char(), 'X');
        assert_eq!(Mark::from_char('o'), Some(Mark::O));
        assert_eq!(Mark::from_char('.'), None);
    }

    #[test]
    fn test_position_valid() {
        assert!(Position::new(0, 0).is_some());
        assert!(Position::new(2, 2).is_some());
        assert!(Position::new(3, 0).is_none());
        assert!(Position::new(0, 3).is_none());
        assert!(!Position::new_unchecked(1, 5).is_valid());
    }

    #[test]
    fn test_position_index() {
        let pos = Position::new_unchecked(1, 2);
        assert_eq!(pos.to_index(), 5);
        assert_eq!(Position::new_unchecked(2, 2).to_index(), 8);
    }

    #[test]
    fn test_position_all_row_major() {
        let all: Vec<_> = Position::all().collect();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], Position::new_unchecked(0, 0));
        assert_eq!(all[1], Position::new_unchecked(0, 1));
        assert_eq!(all[3], Position::new_unchecked(1, 0));
        assert_eq!(all[8], Position::new_unchecked(2, 2));
    }
}
