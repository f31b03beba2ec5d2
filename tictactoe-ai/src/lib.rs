//! 井字棋 AI 引擎
//!
//! 包含:
//! - 终局评分
//! - 完全穷举的 Minimax 搜索（无剪枝）
//! - 带难度配置的 AI 引擎

mod engine;
mod evaluate;
mod search;

pub use engine::{AiConfig, AiEngine, Difficulty};
pub use evaluate::Evaluator;
pub use search::{Minimax, SearchResult};
