//! 游戏配置
//!
//! JSON 配置文件，缺省字段取默认值

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tictactoe_ai::AiConfig;

use crate::session::GameMode;

/// 游戏配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// 游戏模式
    pub mode: GameMode,
    /// AI 配置（仅人机模式生效）
    pub ai: AiConfig,
    /// X 方玩家名
    pub x_player: String,
    /// O 方玩家名
    pub o_player: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            ai: AiConfig::default(),
            x_player: "Player".to_string(),
            o_player: "Computer".to_string(),
        }
    }
}

impl GameConfig {
    /// 从文件加载
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件: {:?}", path))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("配置文件格式错误: {:?}", path))?;
        Ok(config)
    }

    /// 加载指定文件；未指定时尝试默认位置，都没有则使用默认配置
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                tracing::info!("加载配置文件: {:?}", path);
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// 默认配置文件位置
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tictactoe").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tictactoe_ai::Difficulty;
    use tictactoe_core::Mark;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.mode.ai_mark(), Some(Mark::O));
        assert_eq!(config.ai.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "mode": { "PvE": { "ai_mark": "X" } }, "ai": { "difficulty": "Easy", "seed": 7 } }"#,
        )
        .unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.mode.ai_mark(), Some(Mark::X));
        assert_eq!(config.ai.difficulty, Difficulty::Easy);
        assert_eq!(config.ai.seed, Some(7));
        assert_eq!(config.x_player, "Player");
    }

    #[test]
    fn test_load_pvp() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "mode": "PvP", "o_player": "Bob" }"#).unwrap();

        let config = GameConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.mode, GameMode::PvP);
        assert_eq!(config.o_player, "Bob");
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");
        assert!(GameConfig::load(&path).is_err());
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ mode: ").unwrap();

        let err = GameConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("配置文件格式错误"));
    }
}
