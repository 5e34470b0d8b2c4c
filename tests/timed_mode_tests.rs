//! Timed-challenge session tests: the stage-cleared loop, the shared
//! session clock, and the end-of-session summary.

use tileswap::core::{EngineEvent, FeedbackContext, GameEngine};
use tileswap::types::{
    GameMode, GamePhase, GridSize, STAGE_CLEARED_PAUSE_MS, SWAP_DURATION_MS, TICK_MS,
};

fn run_to_playing(engine: &mut GameEngine) {
    let mut guard = 0;
    while engine.phase() != GamePhase::Playing || engine.is_shuffling() {
        engine.tick(TICK_MS);
        guard += 1;
        assert!(guard < 10_000, "engine never reached interactive play");
    }
}

fn click(engine: &mut GameEngine, idx: usize) {
    let n = engine.grid().n();
    let surface = (n * 100) as f32;
    let x = (idx % n) as f32 * 100.0 + 50.0;
    let y = (idx / n) as f32 * 100.0 + 50.0;
    engine.pointer_click(x, y, surface, surface);
}

fn solve(engine: &mut GameEngine) -> u32 {
    let mut swaps = 0;
    let mut guard = 0;
    while !engine.grid().is_solved() {
        let misplaced = engine
            .grid()
            .tiles()
            .iter()
            .enumerate()
            .find(|&(pos, &t)| pos != t as usize)
            .map(|(pos, _)| pos)
            .expect("unsolved grid has a misplaced tile");
        let target = engine
            .grid()
            .position_of(misplaced as u8)
            .expect("tile exists");

        click(engine, misplaced);
        click(engine, target);
        engine.tick(SWAP_DURATION_MS);
        swaps += 1;

        guard += 1;
        assert!(guard < 100, "solver did not converge");
    }
    swaps
}

#[test]
fn test_solve_enters_stage_cleared_then_next_puzzle() {
    let mut engine = GameEngine::new(42);
    engine.start_timed(GridSize::Three, 3);
    assert_eq!(engine.mode(), GameMode::Timed);
    run_to_playing(&mut engine);
    assert!(engine.session().is_some());

    let swaps = solve(&mut engine);
    assert_eq!(engine.phase(), GamePhase::StageCleared);

    let session = engine.session().expect("session survives stage-cleared");
    assert_eq!(session.puzzles_cleared(), 1);
    assert_eq!(session.total_moves(), swaps);

    // No leaderboard entry and no per-puzzle victory text in timed mode.
    assert!(engine.leaderboard().bucket(GridSize::Three).is_empty());
    assert!(!engine
        .take_events()
        .iter()
        .any(|e| matches!(e, EngineEvent::VictoryTextRequest { .. })));

    // After the pause a fresh shuffled puzzle begins at the same size, with
    // per-puzzle counters reset but session counters intact.
    engine.tick(STAGE_CLEARED_PAUSE_MS);
    assert_eq!(engine.phase(), GamePhase::Playing);
    assert!(engine.is_shuffling());
    assert_eq!(engine.move_count(), 0);
    assert_eq!(engine.hint_budget(), GridSize::Three.hint_budget());
    assert_eq!(engine.session().unwrap().puzzles_cleared(), 1);
    assert_eq!(engine.session().unwrap().total_moves(), swaps);
}

#[test]
fn test_session_clock_runs_through_stage_cleared_pause() {
    let mut engine = GameEngine::new(42);
    engine.start_timed(GridSize::Three, 3);
    run_to_playing(&mut engine);
    solve(&mut engine);
    assert_eq!(engine.phase(), GamePhase::StageCleared);

    let before = engine.session().unwrap().remaining_ms();
    engine.tick(1000);
    let after = engine.session().unwrap().remaining_ms();
    assert_eq!(after, before - 1000);
}

#[test]
fn test_session_expiry_reaches_times_up_with_stats() {
    let mut engine = GameEngine::new(42);
    engine.start_timed(GridSize::Three, 1);
    run_to_playing(&mut engine);

    let cleared = solve(&mut engine);
    assert!(cleared > 0);
    engine.tick(STAGE_CLEARED_PAUSE_MS);
    run_to_playing(&mut engine);
    engine.take_events();

    // Let the rest of the minute run out without solving.
    let mut guard = 0;
    while engine.phase() != GamePhase::TimesUp {
        engine.tick(1000);
        guard += 1;
        assert!(guard <= 60, "session never expired");
    }

    let stats = *engine.last_timed_stats().expect("summary recorded");
    assert_eq!(stats.puzzles_cleared, 1);
    assert_eq!(stats.total_moves, cleared);
    assert!(stats.avg_secs_per_puzzle.is_some());

    // All activity stops and the summary is broadcast once.
    assert!(engine.session().is_none());
    assert!(engine.transition().is_none());
    assert!(!engine.is_shuffling());
    let events = engine.take_events();
    assert!(events.contains(&EngineEvent::SessionEnded { stats }));
    assert!(events.iter().any(|e| matches!(
        e,
        EngineEvent::VictoryTextRequest {
            context: FeedbackContext::Timed { .. },
            ..
        }
    )));

    // The result screen accepts late victory text, then reset clears it.
    let generation = engine.feedback_generation();
    engine.victory_text(generation, "what a run".to_string());
    assert_eq!(engine.victory_message(), Some("what a run"));
    engine.reset();
    assert_eq!(engine.phase(), GamePhase::Idle);
    assert_eq!(engine.victory_message(), None);
}

#[test]
fn test_expiry_with_no_clears_yields_empty_average() {
    let mut engine = GameEngine::new(5);
    engine.start_timed(GridSize::Four, 1);
    run_to_playing(&mut engine);

    let mut guard = 0;
    while engine.phase() != GamePhase::TimesUp {
        engine.tick(1000);
        guard += 1;
        assert!(guard <= 60, "session never expired");
    }

    let stats = engine.last_timed_stats().expect("summary recorded");
    assert_eq!(stats.puzzles_cleared, 0);
    assert_eq!(stats.total_moves, 0);
    assert_eq!(stats.avg_secs_per_puzzle, None);
}
