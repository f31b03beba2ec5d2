use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_cli::{Args, Console, GameConfig, GameSession};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // 初始化日志（输出到 stderr，避免干扰棋盘显示）
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("tictactoe_cli=info".parse()?))
        .init();

    let args = Args::parse();
    let mut config = GameConfig::load_or_default(args.config.as_deref())?;
    args.apply_overrides(&mut config);
    info!("井字棋启动，模式: {:?}，难度: {:?}", config.mode, config.ai.difficulty);

    let session = match args.position {
        Some(grid) => {
            GameSession::from_position(&config, grid).context("无法从指定局面开始")?
        }
        None => GameSession::new(&config),
    };
    let stdin = io::stdin();
    let mut console = Console::new(session, stdin.lock(), io::stdout());
    console.run()?;

    if args.print_record {
        println!("{}", console.session().record().to_json()?);
    }

    Ok(())
}
