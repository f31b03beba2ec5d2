//! AI 引擎
//!
//! 在 Minimax 之上加入难度：低难度以一定概率改走随机空位

use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tictactoe_core::{Grid, Mark, Position};

use crate::search::Minimax;

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    /// 简单：30% 概率随机落子
    Easy,
    /// 中等：10% 概率随机落子
    Medium,
    /// 困难：始终最优
    #[default]
    Hard,
}

impl Difficulty {
    /// 改走随机空位的概率
    pub fn random_move_chance(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.3,
            Difficulty::Medium => 0.1,
            Difficulty::Hard => 0.0,
        }
    }

    /// 显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}

/// AI 配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    /// 随机数种子，None 时使用系统熵
    pub seed: Option<u64>,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            seed: None,
        }
    }
}

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    rng: ChaCha8Rng,
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            config,
            rng,
            nodes_searched: 0,
        }
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(AiConfig::from_difficulty(difficulty))
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 为 `mark` 选择落子；棋盘已终局时返回 None
    ///
    /// 在棋盘副本上搜索，调用方的棋盘不会被修改。
    pub fn choose_move(&mut self, grid: &Grid, mark: Mark) -> Option<Position> {
        let mut scratch = *grid;
        let mut minimax = Minimax::new(mark);
        let result = minimax.search(&mut scratch, true);
        self.nodes_searched = minimax.nodes_searched();

        let best = result.best_move?;
        tracing::debug!(
            "AI {} 最佳落子 {} 分值 {} 节点数 {}",
            mark,
            best,
            result.score,
            self.nodes_searched
        );

        let chance = self.config.difficulty.random_move_chance();
        if chance > 0.0 && self.rng.gen::<f64>() < chance {
            if let Some(random) = grid.open_positions().choose(&mut self.rng) {
                tracing::debug!(
                    "难度 {:?}: 改走随机落子 {}",
                    self.config.difficulty,
                    random
                );
                return Some(*random);
            }
        }

        Some(best)
    }

    /// 上一次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}
