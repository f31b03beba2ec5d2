//! 终局评分

use tictactoe_core::{Mark, Outcome};

/// 最大化方获胜
pub const WIN_SCORE: i32 = 1;
/// 和棋
pub const TIE_SCORE: i32 = 0;
/// 最小化方获胜
pub const LOSS_SCORE: i32 = -1;

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 终局分值（以 `max_mark` 为最大化方），进行中返回 None
    pub fn terminal_score(outcome: &Outcome, max_mark: Mark) -> Option<i32> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Win { mark, .. } if *mark == max_mark => Some(WIN_SCORE),
            Outcome::Win { .. } => Some(LOSS_SCORE),
            Outcome::Tie => Some(TIE_SCORE),
        }
    }
}
