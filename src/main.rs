use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use voice_snake::game::{GameConfig, GameMode};
use voice_snake::input::VoiceSource;
use voice_snake::modes::PlaySession;
use voice_snake::score::FileLedger;

#[derive(Parser)]
#[command(name = "voice_snake")]
#[command(version, about = "Snake game with keyboard and voice control")]
struct Cli {
    /// Game variant
    #[arg(long, value_enum, default_value_t = ModeArg::Classic)]
    mode: ModeArg,

    /// Control scheme
    #[arg(long, value_enum, default_value_t = ControlArg::Keyboard)]
    control: ControlArg,

    /// Score ledger file
    #[arg(long, default_value = "snake_scores.json")]
    scores: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Classic,
    Intermediate,
    Labyrinth,
    Expert,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Classic => GameMode::Classic,
            ModeArg::Intermediate => GameMode::Intermediate,
            ModeArg::Labyrinth => GameMode::Labyrinth,
            ModeArg::Expert => GameMode::Expert,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ControlArg {
    Keyboard,
    Voice,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.mode.into());
    let ledger = Box::new(FileLedger::load(cli.scores));

    let voice = match cli.control {
        ControlArg::Keyboard => None,
        ControlArg::Voice => {
            let source = VoiceSource::new();
            if source.is_available() {
                Some(source)
            } else {
                eprintln!(
                    "voice control unavailable ({}); falling back to keyboard",
                    source.status()
                );
                None
            }
        }
    };

    let mut session = PlaySession::new(config, ledger, voice);
    session.run().await
}
