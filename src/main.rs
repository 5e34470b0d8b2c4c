//! Terminal demo runner.
//!
//! Wires the puzzle engine to stub collaborators: a stub video source, a
//! JSON-file leaderboard store, and a canned text generator running on a
//! small tokio runtime. The loop mirrors the engine's contract: poll input,
//! tick at a fixed cadence, then dispatch the emitted events.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::oneshot;

use tileswap::collab::textgen::{build_prompt, parse_response};
use tileswap::collab::{
    CannedTextGenerator, FileStorage, StubVideoSource, TextGenerator, VideoSource,
};
use tileswap::core::leaderboard::epoch_ms;
use tileswap::core::{EngineEvent, GameEngine, Leaderboard};
use tileswap::input::{map_key, should_quit, EngineInput};
use tileswap::term::{render_lines, TerminalRenderer};
use tileswap::types::{
    GameMode, CAPTURE_HEIGHT, CAPTURE_WIDTH, DEFAULT_TIMED_MINUTES, TICK_MS,
};

/// In-flight victory-text request, keyed by the engine generation that
/// issued it so stale results can be discarded.
struct PendingVictoryText {
    generation: u32,
    rx: oneshot::Receiver<Result<String>>,
}

fn main() -> Result<()> {
    env_logger::init();

    let runtime = tokio::runtime::Runtime::new()?;
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, runtime.handle().clone());

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, handle: tokio::runtime::Handle) -> Result<()> {
    let mut storage = FileStorage::new("tileswap-leaderboard.json");
    let mut video = StubVideoSource::new();
    let textgen = CannedTextGenerator::new(handle, 800);

    let mut engine = GameEngine::new(epoch_ms() as u32);
    engine.set_leaderboard(Leaderboard::load(&storage));

    let mut pending: Option<PendingVictoryText> = None;
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        term.draw(&render_lines(&engine.snapshot(), engine.victory_message()))?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        video.release();
                        return Ok(());
                    }
                    if let Some(input) = map_key(key.code) {
                        apply_input(&mut engine, &mut video, input);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            engine.tick(TICK_MS);
        }

        // Poll the fire-and-forget text request without blocking the loop.
        if let Some(mut p) = pending.take() {
            match p.rx.try_recv() {
                Ok(Ok(raw)) => match parse_response(&raw) {
                    Some(text) => engine.victory_text(p.generation, text),
                    None => log::warn!("unusable victory text response, keeping fallback"),
                },
                Ok(Err(e)) => log::warn!("victory text request failed: {:#}", e),
                Err(oneshot::error::TryRecvError::Empty) => pending = Some(p),
                Err(oneshot::error::TryRecvError::Closed) => {
                    log::warn!("victory text channel closed, keeping fallback");
                }
            }
        }

        for event in engine.take_events() {
            match event {
                EngineEvent::PersistLeaderboard => {
                    engine.leaderboard().persist(&mut storage);
                }
                EngineEvent::VictoryTextRequest {
                    generation,
                    context,
                } => {
                    let rx = textgen.request(build_prompt(&context));
                    pending = Some(PendingVictoryText { generation, rx });
                }
                EngineEvent::ReleaseVideo => video.release(),
                EngineEvent::HintDenied => log::info!("hint requested with empty budget"),
                EngineEvent::SessionEnded { stats } => log::info!(
                    "timed session over: {} puzzles, {} moves",
                    stats.puzzles_cleared,
                    stats.total_moves
                ),
            }
        }
    }
}

fn apply_input(engine: &mut GameEngine, video: &mut StubVideoSource, input: EngineInput) {
    match input {
        EngineInput::Focus(dir) => engine.focus_move(dir),
        EngineInput::Activate => engine.activate(),
        EngineInput::Hint => engine.hint(),
        EngineInput::Undo => engine.undo(),
        EngineInput::Reset => engine.reset(),
        EngineInput::StartClassic(size) => start(engine, video, GameMode::Classic, size),
        EngineInput::StartTimed => {
            start(engine, video, GameMode::Timed, tileswap::types::GridSize::Three)
        }
    }
}

fn start(
    engine: &mut GameEngine,
    video: &mut StubVideoSource,
    mode: GameMode,
    size: tileswap::types::GridSize,
) {
    match video.acquire(CAPTURE_WIDTH, CAPTURE_HEIGHT) {
        Ok(()) => match mode {
            GameMode::Classic => engine.start_classic(size),
            GameMode::Timed => engine.start_timed(size, DEFAULT_TIMED_MINUTES),
        },
        Err(reason) => engine.capture_failed(reason),
    }
}
