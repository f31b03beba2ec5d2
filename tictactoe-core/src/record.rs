//! 棋谱记录格式
//!
//! 对局的内存记录，可导出为 JSON 或纯文本

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::mark::{Mark, Position};
use crate::notation::Notation;
use crate::rules::Outcome;

/// 棋谱版本
pub const RECORD_VERSION: &str = "1.0";

/// 对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordResult {
    /// 一方胜
    Win(Mark),
    /// 和棋
    Tie,
}

impl RecordResult {
    /// 从局面结果转换，进行中返回 None
    pub fn from_outcome(outcome: &Outcome) -> Option<Self> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Win { mark, .. } => Some(RecordResult::Win(*mark)),
            Outcome::Tie => Some(RecordResult::Tie),
        }
    }
}

/// 对局元数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMetadata {
    /// X 方玩家名
    pub x_player: String,
    /// O 方玩家名
    pub o_player: String,
    /// 对局日期
    pub date: String,
    /// 对局结果
    pub result: Option<RecordResult>,
    /// AI 难度（人机模式）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_difficulty: Option<String>,
    /// 起始局面（非空棋盘开局时）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_position: Option<String>,
}

/// 走法记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 落子方
    pub mark: Mark,
    /// 落子位置 [row, col]
    pub position: [u8; 2],
    /// 是否由 AI 走出
    #[serde(default)]
    pub automated: bool,
}

impl MoveRecord {
    /// 创建新的走法记录
    pub fn new(mark: Mark, pos: Position, automated: bool) -> Self {
        Self {
            mark,
            position: [pos.row, pos.col],
            automated,
        }
    }
}

/// 完整的棋谱记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// 版本号
    pub version: String,
    /// 元数据
    pub metadata: GameMetadata,
    /// 走法列表
    pub moves: Vec<MoveRecord>,
}

impl GameRecord {
    /// 创建新的棋谱记录
    pub fn new(x_player: String, o_player: String) -> Self {
        Self {
            version: RECORD_VERSION.to_string(),
            metadata: GameMetadata {
                x_player,
                o_player,
                date: Utc::now().format("%Y-%m-%d").to_string(),
                result: None,
                ai_difficulty: None,
                start_position: None,
            },
            moves: Vec::new(),
        }
    }

    /// 设置 AI 难度
    pub fn set_ai_difficulty(&mut self, difficulty: &str) {
        self.metadata.ai_difficulty = Some(difficulty.to_string());
    }

    /// 记录起始局面
    pub fn set_start_position(&mut self, grid: &Grid) {
        self.metadata.start_position = Some(Notation::to_string(grid));
    }

    /// 添加走法
    pub fn add_move(&mut self, mv: MoveRecord) {
        self.moves.push(mv);
    }

    /// 设置对局结果
    pub fn set_result(&mut self, result: RecordResult) {
        self.metadata.result = Some(result);
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// 纯文本摘要
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("X: {}\n", self.metadata.x_player));
        output.push_str(&format!("O: {}\n", self.metadata.o_player));
        if let Some(start) = &self.metadata.start_position {
            output.push_str(&format!("Start: {}\n", start));
        }

        for (i, mv) in self.moves.iter().enumerate() {
            let suffix = if mv.automated { " (ai)" } else { "" };
            output.push_str(&format!(
                "{}. {} ({}, {}){}\n",
                i + 1,
                mv.mark,
                mv.position[0],
                mv.position[1],
                suffix
            ));
        }

        match self.metadata.result {
            Some(RecordResult::Win(mark)) => output.push_str(&format!("Result: {} wins\n", mark)),
            Some(RecordResult::Tie) => output.push_str("Result: tie\n"),
            None => {}
        }

        output
    }
}
