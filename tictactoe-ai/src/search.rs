//! 搜索引擎
//!
//! 完全穷举的 Minimax，不剪枝、不限深度。搜索在传入的棋盘上原地试走，
//! 每一步试走都由 [`Placement`] 持有，离开作用域时恢复为空格。

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use tictactoe_core::{evaluate, Grid, Mark, Position};

use crate::evaluate::Evaluator;

/// 搜索结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// 分值：1 最大化方胜，0 和棋，-1 最小化方胜
    pub score: i32,
    /// 最佳落子；传入的棋盘已终局时为 None
    pub best_move: Option<Position>,
}

/// 试走：创建时落子，Drop 时恢复空格
struct Placement<'a> {
    grid: &'a mut Grid,
    pos: Position,
}

impl<'a> Placement<'a> {
    fn new(grid: &'a mut Grid, pos: Position, mark: Mark) -> Self {
        grid.set(pos, Some(mark));
        Self { grid, pos }
    }
}

impl Deref for Placement<'_> {
    type Target = Grid;

    fn deref(&self) -> &Grid {
        self.grid
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Grid {
        self.grid
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.grid.set(self.pos, None);
    }
}

/// Minimax 搜索
#[derive(Debug)]
pub struct Minimax {
    max_mark: Mark,
    nodes_searched: u64,
}

impl Minimax {
    /// 创建搜索器，`max_mark` 为最大化方
    pub fn new(max_mark: Mark) -> Self {
        Self {
            max_mark,
            nodes_searched: 0,
        }
    }

    /// 搜索最佳走法
    ///
    /// `maximizing` 为 true 时替 `max_mark` 选择，否则替对方选择。
    /// 返回时棋盘与调用前完全一致。
    pub fn search(&mut self, grid: &mut Grid, maximizing: bool) -> SearchResult {
        self.nodes_searched = 0;
        self.minimax(grid, maximizing)
    }

    fn minimax(&mut self, grid: &mut Grid, maximizing: bool) -> SearchResult {
        self.nodes_searched += 1;

        if let Some(score) = Evaluator::terminal_score(&evaluate(grid), self.max_mark) {
            return SearchResult {
                score,
                best_move: None,
            };
        }

        let mover = if maximizing {
            self.max_mark
        } else {
            self.max_mark.opponent()
        };

        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for pos in grid.open_positions() {
            let score = {
                let mut placed = Placement::new(grid, pos, mover);
                self.minimax(&mut placed, !maximizing).score
            };

            // 严格更优才替换：同分时保留行优先顺序中最先找到的位置
            let better = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if better {
                best_score = score;
                best_move = Some(pos);
            }
        }

        SearchResult {
            score: best_score,
            best_move,
        }
    }

    /// 上一次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{apply_move, Notation, Outcome};

    fn search(text: &str, max_mark: Mark, maximizing: bool) -> SearchResult {
        let mut grid = Notation::parse(text).unwrap();
        Minimax::new(max_mark).search(&mut grid, maximizing)
    }

    #[test]
    fn test_one_move_from_win() {
        let result = search("XX./.../...", Mark::X, true);
        assert_eq!(result.score, 1);
        assert_eq!(result.best_move, Some(Position::new_unchecked(0, 2)));
    }

    #[test]
    fn test_terminal_grid_has_no_move() {
        let result = search("X../.X./..X", Mark::X, true);
        assert_eq!(result, SearchResult { score: 1, best_move: None });

        let result = search("XOX/XOO/OXX", Mark::X, false);
        assert_eq!(result, SearchResult { score: 0, best_move: None });

        let result = search("OOO/XX./X..", Mark::X, true);
        assert_eq!(result.score, -1);
        assert!(result.best_move.is_none());
    }

    #[test]
    fn test_minimizing_blocks() {
        // O 必须堵 (0, 2)，之后双方最优为和棋
        let result = search("XX./.O./...", Mark::X, false);
        assert_eq!(result.score, 0);
        assert_eq!(result.best_move, Some(Position::new_unchecked(0, 2)));
    }

    #[test]
    fn test_max_mark_can_be_o() {
        let result = search("OO./XX./X..", Mark::O, true);
        assert_eq!(result.score, 1);
        assert_eq!(result.best_move, Some(Position::new_unchecked(0, 2)));
    }

    #[test]
    fn test_tie_break_keeps_first_found() {
        // (0, 0) 形成双杀，与 (1, 2) 直接取胜同分，行优先先找到 (0, 0)
        let result = search(".O./XX./O..", Mark::X, true);
        assert_eq!(result.score, 1);
        assert_eq!(result.best_move, Some(Position::new_unchecked(0, 0)));
    }

    #[test]
    fn test_empty_grid_deterministic() {
        let mut grid = Grid::empty();
        let mut minimax = Minimax::new(Mark::X);

        let first = minimax.search(&mut grid, true);
        let second = minimax.search(&mut grid, true);

        assert_eq!(first, second);
        assert_eq!(first.score, 0);
        assert_eq!(first.best_move, Some(Position::new_unchecked(0, 0)));
        assert!(minimax.nodes_searched() > 0);
    }

    #[test]
    fn test_grid_restored_after_search() {
        for text in [".../.../...", "X../.O./...", "XO./.X./..O", "XOX/XOO/OXX"] {
            let mut grid = Notation::parse(text).unwrap();
            let before = grid;
            Minimax::new(Mark::X).search(&mut grid, true);
            assert_eq!(grid, before);
            Minimax::new(Mark::O).search(&mut grid, false);
            assert_eq!(grid, before);
        }
    }

    #[test]
    fn test_optimal_self_play_ties() {
        let mut grid = Grid::empty();
        let mut turn = Mark::X;
        let mut minimax = Minimax::new(Mark::X);

        while !evaluate(&grid).is_terminal() {
            let result = minimax.search(&mut grid, turn == Mark::X);
            let pos = result.best_move.unwrap();
            apply_move(&mut grid, pos.row as usize, pos.col as usize, turn).unwrap();
            turn = turn.opponent();
        }

        assert_eq!(evaluate(&grid), Outcome::Tie);
    }
}
