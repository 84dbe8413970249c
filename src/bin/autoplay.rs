#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
use anyhow::{bail, Context};
#[cfg(not(target_arch = "wasm32"))]
use clap::{Parser, ValueEnum};
#[cfg(not(target_arch = "wasm32"))]
use number_elimination::{find_match, Game, GameMode, GameSettings, NumberSourceKind, Supply};
#[cfg(not(target_arch = "wasm32"))]
use serde::Serialize;

#[cfg(not(target_arch = "wasm32"))]
#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    Classic,
    Time,
}

#[cfg(not(target_arch = "wasm32"))]
impl From<ModeArg> for GameMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Classic => GameMode::Classic,
            ModeArg::Time => GameMode::Time,
        }
    }
}

/// Plays seeded headless sessions with a greedy subset-sum player.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
struct Opts {
    /// Game mode to play
    #[arg(long, value_enum, default_value_t = ModeArg::Classic)]
    mode: ModeArg,
    /// Seed for block values and targets
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Number of back-to-back sessions (the high score carries over)
    #[arg(long, default_value_t = 1)]
    sessions: u32,
    /// Stop a session after this many selections
    #[arg(long, default_value_t = 1000)]
    max_moves: u32,
    /// Seconds the player spends per match in time mode
    #[arg(long, default_value_t = 2)]
    think_secs: u32,
    /// Use the endless ruleset (no block pool, fixed target range)
    #[arg(long)]
    unlimited: bool,
    /// Pretty-print the JSON summaries
    #[arg(long)]
    pretty: bool,
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Serialize)]
struct SessionSummary {
    session: u32,
    mode: GameMode,
    seed: u64,
    score: u32,
    high_score: u32,
    moves: u32,
    matches: u32,
    won: bool,
    game_over: bool,
    stuck: bool,
    blocks_left: usize,
    pool_left: Option<u32>,
}

#[cfg(not(target_arch = "wasm32"))]
fn play_session(game: &mut Game, opts: &Opts) -> (u32, u32, bool) {
    let mode: GameMode = opts.mode.into();
    let (mut moves, mut matches) = (0, 0);
    while game.is_active() && moves < opts.max_moves {
        if mode == GameMode::Time {
            for _ in 0..opts.think_secs {
                game.on_tick();
            }
            if !game.is_active() {
                break;
            }
        }
        match find_match(game.board(), game.target()) {
            Some(ids) => {
                for id in ids {
                    game.select_block(id);
                    moves += 1;
                }
                matches += 1;
            }
            // classic mode only changes on a match, so nothing else will happen
            None if mode == GameMode::Classic => return (moves, matches, true),
            None => {
                game.on_tick();
            }
        }
    }
    (moves, matches, false)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    if opts.sessions == 0 {
        bail!("--sessions must be at least 1");
    }
    let settings = GameSettings {
        supply: if opts.unlimited {
            Supply::Unlimited
        } else {
            GameSettings::default().supply
        },
        ..GameSettings::default()
    };
    let mut game = Game::from_kind(settings, NumberSourceKind::Seeded { seed: opts.seed });

    for session in 0..opts.sessions {
        game.start_session(Some(opts.mode.into()));
        let (moves, matches, stuck) = play_session(&mut game, &opts);
        let summary = SessionSummary {
            session,
            mode: opts.mode.into(),
            seed: opts.seed,
            score: game.score(),
            high_score: game.high_score(),
            moves,
            matches,
            won: game.is_win(),
            game_over: game.is_game_over(),
            stuck,
            blocks_left: game.board().len(),
            pool_left: game.blocks_pool(),
        };
        let line = if opts.pretty {
            serde_json::to_string_pretty(&summary)
        } else {
            serde_json::to_string(&summary)
        }
        .context("serializing session summary")?;
        println!("{}", line);
    }
    Ok(())
}
