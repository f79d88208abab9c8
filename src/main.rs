//! Terminal runner (default binary).
//!
//! One loop owns the session: it waits for a key press or the next fall tick,
//! feeds whichever arrives to the engine, then redraws.

use std::env;
use std::fs::File;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use env_logger::{Env, Target};

use blockfall::core::{EngineConfig, RuleEngine};
use blockfall::engine::{DriverConfig, Flow, Session};
use blockfall::input::handle_key_event;
use blockfall::term::{GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    init_logging()?;

    let config = EngineConfig::from_env().context("invalid board configuration")?;
    let engine = match env::var("BLOCKFALL_SEED") {
        Ok(seed) => {
            let seed = seed
                .trim()
                .parse::<u64>()
                .with_context(|| format!("BLOCKFALL_SEED is not a number: {seed:?}"))?;
            RuleEngine::with_seed(config, seed)
        }
        Err(_) => RuleEngine::new(config),
    };
    let mut session = Session::new(engine, DriverConfig::from_env(), Instant::now());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();

    let engine = session.engine();
    println!(
        "score {}  lines {}  pieces {}",
        engine.score(),
        engine.lines(),
        engine.pieces_settled()
    );
    result
}

/// Logs go to `BLOCKFALL_LOG` when set; stderr belongs to the alternate screen.
fn init_logging() -> Result<()> {
    let Ok(path) = env::var("BLOCKFALL_LOG") else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("cannot open log file {path}"))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .write_style(env_logger::WriteStyle::Never)
        .try_init()?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut snapshot = session.engine().snapshot();

    loop {
        // Render.
        session.engine().snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&snapshot, Viewport::new(w, h));
        term.draw(&fb)?;

        if session.engine().is_game_over() {
            // Leave the final board up until the player quits.
            if let Event::Key(key) = event::read()? {
                if let Some(action) = handle_key_event(key) {
                    if session.handle(action) == Flow::Quit {
                        return Ok(());
                    }
                }
            }
            continue;
        }

        // Input with timeout until the next fall tick or frame.
        if event::poll(session.wait_budget(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = handle_key_event(key) {
                    if session.handle(action) == Flow::Quit {
                        return Ok(());
                    }
                }
            }
        }

        if session.poll_timer(Instant::now()) == Flow::Quit {
            return Ok(());
        }
    }
}
