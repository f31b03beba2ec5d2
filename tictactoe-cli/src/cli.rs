//! 命令行参数

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tictactoe_ai::Difficulty;
use tictactoe_core::{Grid, Mark, Notation};

use crate::config::GameConfig;
use crate::session::GameMode;

/// AI 执子方
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AiSide {
    X,
    O,
    /// 双人对战
    #[value(name = "none")]
    Nobody,
}

/// 终端井字棋
#[derive(Debug, Parser)]
#[command(name = "tictactoe", version, about = "Tic-tac-toe against an optimal opponent")]
pub struct Args {
    /// JSON 配置文件
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// AI 执子方
    #[arg(long, value_enum)]
    pub ai: Option<AiSide>,

    /// AI 难度 (easy, medium, hard)
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// 随机数种子
    #[arg(long)]
    pub seed: Option<u64>,

    /// 起始局面，如 `XO./.X./..O`
    #[arg(long, value_name = "GRID", value_parser = Notation::parse)]
    pub position: Option<Grid>,

    /// 退出时输出 JSON 棋谱
    #[arg(long)]
    pub print_record: bool,
}

impl Args {
    /// 命令行参数覆盖配置文件
    pub fn apply_overrides(&self, config: &mut GameConfig) {
        if let Some(side) = self.ai {
            config.mode = match side {
                AiSide::X => GameMode::PvE { ai_mark: Mark::X },
                AiSide::O => GameMode::PvE { ai_mark: Mark::O },
                AiSide::Nobody => GameMode::PvP,
            };
        }
        if let Some(difficulty) = self.difficulty {
            config.ai.difficulty = difficulty;
        }
        if self.seed.is_some() {
            config.ai.seed = self.seed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{GameSession, GameStatus};

    #[test]
    fn test_defaults_keep_config() {
        let args = Args::try_parse_from(["tictactoe"]).unwrap();
        let mut config = GameConfig::default();
        args.apply_overrides(&mut config);
        assert_eq!(config, GameConfig::default());
        assert!(!args.print_record);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "tictactoe",
            "--ai",
            "x",
            "--difficulty",
            "easy",
            "--seed",
            "9",
            "--print-record",
        ])
        .unwrap();
        let mut config = GameConfig::default();
        args.apply_overrides(&mut config);

        assert_eq!(config.mode, GameMode::PvE { ai_mark: Mark::X });
        assert_eq!(config.ai.difficulty, Difficulty::Easy);
        assert_eq!(config.ai.seed, Some(9));
        assert!(args.print_record);
    }

    #[test]
    fn test_pvp_override() {
        let args = Args::try_parse_from(["tictactoe", "--ai", "none"]).unwrap();
        let mut config = GameConfig::default();
        args.apply_overrides(&mut config);
        assert_eq!(config.mode, GameMode::PvP);
    }

    #[test]
    fn test_position_option() {
        let args = Args::try_parse_from(["tictactoe", "--position", "X../.O./..X"]).unwrap();
        let grid = args.position.unwrap();
        assert_eq!(grid.count(Mark::X), 2);
        assert_eq!(grid.count(Mark::O), 1);

        let session = GameSession::from_position(&GameConfig::default(), grid).unwrap();
        assert_eq!(session.status(), GameStatus::InProgress { turn: Mark::X });
        assert_eq!(session.grid().count(Mark::O), 2);
    }

    #[test]
    fn test_bad_position() {
        assert!(Args::try_parse_from(["tictactoe", "--position", "XO./.X."]).is_err());
        assert!(Args::try_parse_from(["tictactoe", "--position", "XQ./.../..."]).is_err());
    }

    #[test]
    fn test_bad_difficulty() {
        assert!(Args::try_parse_from(["tictactoe", "--difficulty", "nightmare"]).is_err());
    }
}
