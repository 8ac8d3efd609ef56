use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use classic_snake::clock::GameClock;
use classic_snake::config::{Difficulty, FRAME_POLL_INTERVAL};
use classic_snake::game::{GameState, StepOutcome};
use classic_snake::input::{GameInput, poll_input};
use classic_snake::logging::init_file_logging;
use classic_snake::renderer::{self, FrameInfo};
use classic_snake::settings::{Settings, load_settings, settings_path};
use classic_snake::terminal_runtime::{AppTerminal, TerminalSession};
use classic_snake::theme::detect_theme;
use classic_snake::ui::prompt::prompt_difficulty;
use tracing::info;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Skip the startup prompt and play at this speed.
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Board width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Board height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Segments in a freshly reset snake.
    #[arg(long = "length")]
    initial_length: Option<usize>,

    /// Seed food placement for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Read settings from this JSON file instead of the default location.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Append tracing output to this file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> Settings {
        Settings {
            width: self.width,
            height: self.height,
            initial_length: self.initial_length,
            difficulty: self.difficulty,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_file_logging(path)?;
    }

    let settings_file = cli.settings.clone().unwrap_or_else(settings_path);
    let settings = load_settings(&settings_file)?.merged_with(cli.overrides());
    let config = settings.game_config()?;

    let difficulty = match settings.difficulty {
        Some(difficulty) => difficulty,
        None => prompt_difficulty(&mut io::stdin().lock(), &mut io::stdout())?,
    };
    info!(
        %difficulty,
        width = config.grid.width,
        height = config.grid.height,
        initial_length = config.initial_length,
        "starting game"
    );

    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(config, seed),
        None => GameState::new(config),
    };
    let clock = GameClock::new(difficulty.tick_interval(), Instant::now())?;

    let mut session = TerminalSession::enter()?;
    run(session.terminal_mut(), state, clock, difficulty)?;

    Ok(())
}

fn run(
    terminal: &mut AppTerminal,
    mut state: GameState,
    mut clock: GameClock,
    difficulty: Difficulty,
) -> io::Result<()> {
    let info = FrameInfo {
        bounds: state.bounds(),
        difficulty,
        theme: detect_theme(),
    };

    loop {
        let model = state.render_model();
        terminal.draw(|frame| renderer::render(frame, &model, info))?;

        if let Some(input) = poll_input(FRAME_POLL_INTERVAL)? {
            if input == GameInput::Quit {
                info!(score = state.score, "quit requested");
                break;
            }

            handle_input(&mut state, &mut clock, input);
        }

        if clock.should_step(Instant::now()) {
            let outcome = state.step();
            log_outcome(&state, outcome);
        }
    }

    Ok(())
}

fn handle_input(state: &mut GameState, clock: &mut GameClock, input: GameInput) {
    let was_over = state.status.is_terminal();
    state.apply_input(input);

    if was_over && !state.status.is_terminal() {
        clock.reset(Instant::now());
    }
}

fn log_outcome(state: &GameState, outcome: StepOutcome) {
    match outcome {
        StepOutcome::Ate => {
            let (score, length) = (state.score, state.snake.len());
            info!(score, length, "food eaten");
        }
        StepOutcome::Collided(reason) => {
            info!(?reason, final_score = state.score, "game over");
        }
        StepOutcome::BoardFull => info!(final_score = state.score, "board full, victory"),
        StepOutcome::Moved | StepOutcome::Idle => {}
    }
}
