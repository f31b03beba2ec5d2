//! 对局控制
//!
//! 状态机：`InProgress { turn }` → `Won` / `Tied`。人机模式下，
//! 一次 `play_move` 调用同步完成"人走一步 + AI 应一步"。

use serde::{Deserialize, Serialize};
use tictactoe_ai::AiEngine;
use tictactoe_core::{
    apply_move, evaluate, Cell, GameRecord, Grid, Mark, MoveRecord, Notation, Outcome, Position,
    RecordResult, RulesError, WinningLine, BOARD_SIZE, FIRST_MARK,
};

use crate::config::GameConfig;

/// 游戏模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// 人机对战，`ai_mark` 由 AI 执子
    PvE { ai_mark: Mark },
    /// 双人对战（同一设备）
    PvP,
}

impl GameMode {
    /// AI 执子方（仅人机模式）
    pub fn ai_mark(&self) -> Option<Mark> {
        match self {
            GameMode::PvE { ai_mark } => Some(*ai_mark),
            GameMode::PvP => None,
        }
    }
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { ai_mark: Mark::O }
    }
}

/// 对局状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// 进行中，`turn` 为下一步走子方
    InProgress { turn: Mark },
    /// 一方获胜
    Won { mark: Mark, line: WinningLine },
    /// 和棋
    Tied,
}

impl GameStatus {
    /// 初始状态
    pub fn initial() -> Self {
        GameStatus::InProgress { turn: FIRST_MARK }
    }

    /// 由局面结果得出状态，进行中时轮到 `turn`
    pub fn from_outcome(outcome: &Outcome, turn: Mark) -> Self {
        match *outcome {
            Outcome::InProgress => GameStatus::InProgress { turn },
            Outcome::Win { mark, line } => GameStatus::Won { mark, line },
            Outcome::Tie => GameStatus::Tied,
        }
    }

    /// 是否终局
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// 当前走子方，终局时为 None
    pub fn turn(&self) -> Option<Mark> {
        match self {
            GameStatus::InProgress { turn } => Some(*turn),
            _ => None,
        }
    }
}

/// 对外可见的对局快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub status: GameStatus,
    pub winning_mask: Option<[[bool; BOARD_SIZE]; BOARD_SIZE]>,
    pub turn: Option<Mark>,
}

/// 一次被接受的落子的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    /// 玩家落子
    pub player_move: Position,
    /// AI 应着（如有）
    pub ai_move: Option<Position>,
    /// 落子后的状态
    pub status: GameStatus,
}

/// 单局对局会话
pub struct GameSession {
    grid: Grid,
    start: Grid,
    start_turn: Mark,
    status: GameStatus,
    mode: GameMode,
    ai: Option<AiEngine>,
    record: GameRecord,
    x_player: String,
    o_player: String,
}

impl GameSession {
    /// 按配置创建会话；AI 执先手时立即走出第一步
    pub fn new(config: &GameConfig) -> Self {
        Self::with_start(config, Grid::empty(), FIRST_MARK)
    }

    /// 从给定局面开始，走子方由双方棋子数推出
    ///
    /// 棋子数不可能由正常对局产生时返回 `InvalidNotation`。
    pub fn from_position(config: &GameConfig, grid: Grid) -> Result<Self, RulesError> {
        let turn = turn_for(&grid)?;
        Ok(Self::with_start(config, grid, turn))
    }

    fn with_start(config: &GameConfig, start: Grid, start_turn: Mark) -> Self {
        let ai = config
            .mode
            .ai_mark()
            .map(|_| AiEngine::new(config.ai.clone()));

        let mut session = Self {
            grid: start,
            start,
            start_turn,
            status: GameStatus::initial(),
            mode: config.mode,
            ai,
            record: GameRecord::new(config.x_player.clone(), config.o_player.clone()),
            x_player: config.x_player.clone(),
            o_player: config.o_player.clone(),
        };
        session.reset();
        session
    }

    /// 当前走子方落子
    ///
    /// 越界、格子已占用或对局已结束时拒绝，状态不变。
    pub fn play_move(&mut self, row: usize, col: usize) -> Result<MoveReport, RulesError> {
        let Some(turn) = self.status.turn() else {
            tracing::warn!("对局已结束，拒绝落子 ({}, {})", row, col);
            return Err(RulesError::GameOver);
        };

        let player_move = self.apply(row, col, turn, false).map_err(|err| {
            tracing::warn!("拒绝落子: {}", err);
            err
        })?;
        let ai_move = self.play_ai_turn();

        Ok(MoveReport {
            player_move,
            ai_move,
            status: self.status,
        })
    }

    /// 对局快照
    pub fn state(&self) -> GameSnapshot {
        let winning_mask = match self.status {
            GameStatus::Won { line, .. } => Some(line.mask()),
            _ => None,
        };
        GameSnapshot {
            grid: self.grid.rows(),
            status: self.status,
            winning_mask,
            turn: self.status.turn(),
        }
    }

    /// 重新开始，回到起始局面
    pub fn reset(&mut self) {
        let outcome = evaluate(&self.start);
        self.grid = self.start;
        self.status = GameStatus::from_outcome(&outcome, self.start_turn);
        self.record = GameRecord::new(self.x_player.clone(), self.o_player.clone());
        if !self.start.is_empty() {
            tracing::info!("起始局面: {}", Notation::to_string(&self.start));
            self.record.set_start_position(&self.start);
        }
        if let Some(result) = RecordResult::from_outcome(&outcome) {
            self.record.set_result(result);
        }
        if let Some(engine) = &self.ai {
            self.record
                .set_ai_difficulty(engine.config().difficulty.display_name());
        }
        tracing::info!("新对局开始，模式: {:?}", self.mode);

        self.play_ai_turn();
    }

    /// 落子并更新状态
    fn apply(
        &mut self,
        row: usize,
        col: usize,
        mark: Mark,
        automated: bool,
    ) -> Result<Position, RulesError> {
        apply_move(&mut self.grid, row, col, mark)?;
        let pos = Position::new_unchecked(row as u8, col as u8);
        tracing::debug!("{} 落子 {}", mark, pos);
        self.record.add_move(MoveRecord::new(mark, pos, automated));

        let outcome = evaluate(&self.grid);
        self.status = GameStatus::from_outcome(&outcome, mark.opponent());

        if let Some(result) = RecordResult::from_outcome(&outcome) {
            tracing::info!("对局结束: {:?}", result);
            self.record.set_result(result);
        }

        Ok(pos)
    }

    /// 轮到 AI 时走一步
    fn play_ai_turn(&mut self) -> Option<Position> {
        let turn = self.status.turn()?;
        if self.mode.ai_mark() != Some(turn) {
            return None;
        }

        let engine = self.ai.as_mut()?;
        let pos = engine.choose_move(&self.grid, turn)?;
        match self.apply(pos.row as usize, pos.col as usize, turn, true) {
            Ok(pos) => Some(pos),
            Err(err) => {
                tracing::error!("AI 落子失败: {}", err);
                None
            }
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// 当前对局的棋谱
    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }
}

/// 由双方棋子数推出走子方
fn turn_for(grid: &Grid) -> Result<Mark, RulesError> {
    let first = grid.count(FIRST_MARK);
    let second = grid.count(FIRST_MARK.opponent());

    if first == second {
        Ok(FIRST_MARK)
    } else if first == second + 1 {
        Ok(FIRST_MARK.opponent())
    } else {
        Err(RulesError::InvalidNotation {
            reason: format!(
                "Impossible mark counts: {}={}, {}={}",
                FIRST_MARK,
                first,
                FIRST_MARK.opponent(),
                second
            ),
        })
    }
}
