//! 井字棋终端前端
//!
//! 包含:
//! - 对局控制（回合交替、AI 应着、重开）
//! - 游戏配置
//! - 命令行参数
//! - 终端界面

pub mod cli;
pub mod config;
pub mod console;
pub mod session;

pub use cli::{AiSide, Args};
pub use config::{default_config_path, GameConfig};
pub use console::{render, Command, CommandError, Console};
pub use session::{GameMode, GameSession, GameSnapshot, GameStatus, MoveReport};
