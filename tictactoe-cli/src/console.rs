//! 终端界面
//!
//! 从输入逐行读取命令，调用会话并把棋盘渲染到输出

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;
use tictactoe_core::BOARD_SIZE;

use crate::session::{GameSession, GameSnapshot, GameStatus};

const HELP: &str = "Commands: <row> <col> | reset | show | help | quit";

/// 终端命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play { row: usize, col: usize },
    Reset,
    Show,
    Help,
    Quit,
}

/// 命令解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Invalid coordinate: {0}")]
    BadCoordinate(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|word| !word.is_empty())
            .collect();

        let Some(first) = words.first() else {
            return Err(CommandError::Empty);
        };

        match first.to_ascii_lowercase().as_str() {
            "reset" | "new" => return Ok(Command::Reset),
            "show" => return Ok(Command::Show),
            "help" | "?" => return Ok(Command::Help),
            "quit" | "exit" | "q" => return Ok(Command::Quit),
            _ => {}
        }

        if !first.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
            return Err(CommandError::Unknown(first.to_string()));
        }

        match words.as_slice() {
            [row, col] => {
                let row = row
                    .parse()
                    .map_err(|_| CommandError::BadCoordinate(row.to_string()))?;
                let col = col
                    .parse()
                    .map_err(|_| CommandError::BadCoordinate(col.to_string()))?;
                Ok(Command::Play { row, col })
            }
            _ => Err(CommandError::BadCoordinate(line.trim().to_string())),
        }
    }
}

/// 渲染棋盘与状态，获胜连线用方括号标出
pub fn render(snapshot: &GameSnapshot) -> String {
    let mut output = String::from("   0  1  2\n");

    for row in 0..BOARD_SIZE {
        let mut line = format!("{} ", row);
        for col in 0..BOARD_SIZE {
            let symbol = snapshot.grid[row][col].map_or('.', |mark| mark.to_char());
            let highlighted = snapshot
                .winning_mask
                .map_or(false, |mask| mask[row][col]);
            if highlighted {
                line.push_str(&format!("[{}]", symbol));
            } else {
                line.push_str(&format!(" {} ", symbol));
            }
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    let status = match snapshot.status {
        GameStatus::InProgress { turn } => format!("Turn: {}", turn),
        GameStatus::Won { mark, .. } => format!("{} wins!", mark),
        GameStatus::Tied => "Tie game.".to_string(),
    };
    output.push_str(&status);
    output.push('\n');
    output
}

/// 终端会话
pub struct Console<R, W> {
    session: GameSession,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(session: GameSession, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    /// 主循环，读到 quit 或输入结束时返回
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", HELP)?;
        self.show()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(CommandError::Empty) => {}
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }

        Ok(())
    }

    fn execute(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Play { row, col } => match self.session.play_move(row, col) {
                Ok(report) => {
                    if let Some(ai_move) = report.ai_move {
                        writeln!(self.output, "AI plays {}", ai_move)?;
                    }
                    self.show()
                }
                Err(err) => writeln!(self.output, "Rejected: {}", err),
            },
            Command::Reset => {
                self.session.reset();
                self.show()
            }
            Command::Show => self.show(),
            Command::Help => writeln!(self.output, "{}", HELP),
            Command::Quit => Ok(()),
        }
    }

    fn show(&mut self) -> io::Result<()> {
        let text = render(&self.session.state());
        write!(self.output, "{}", text)
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }
}
