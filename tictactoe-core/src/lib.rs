//! 井字棋共享规则库
//!
//! 包含:
//! - 棋子标记、位置、棋盘等核心数据结构
//! - 连线判定、终局判定 (evaluate) 和落子验证
//! - 棋盘文本表示法
//! - 棋谱记录格式 (JSON)

mod constants;
mod error;
mod grid;
mod mark;
mod notation;
mod record;
mod rules;

pub use constants::*;
pub use error::{Result, RulesError};
pub use grid::{Cell, Grid};
pub use mark::{Mark, Position};
pub use notation::Notation;
pub use record::{GameMetadata, GameRecord, MoveRecord, RecordResult};
pub use rules::{apply_move, evaluate, is_line_full, Outcome, WinningLine, LINES};
