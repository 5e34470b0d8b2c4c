//! Text rendering of the engine snapshot.
//!
//! A stand-in for the real pixel render collaborator: draws the grid as
//! numbered cells with selection/focus markers and a status line per phase.
//! Pure string building, no terminal I/O, so it is directly testable.

use crate::core::snapshot::RenderSnapshot;
use crate::types::{GameMode, GamePhase};

/// Render the snapshot into display lines. The victory message travels
/// outside the snapshot because it is owned text that can arrive late.
pub fn render_lines(snap: &RenderSnapshot, message: Option<&str>) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("tileswap - live camera tile puzzle".to_string());
    lines.push(String::new());

    match snap.phase {
        GamePhase::Idle => {
            lines.push("Press 1/2/3 for a classic 3x3/4x4/5x5 game,".to_string());
            lines.push("t for a timed challenge, q to quit.".to_string());
        }
        GamePhase::Countdown => match snap.countdown {
            Some(0) | None => lines.push("GO!".to_string()),
            Some(t) => lines.push(format!("Starting in {}...", t)),
        },
        GamePhase::Playing | GamePhase::StageCleared => {
            push_grid(&mut lines, snap);
            lines.push(String::new());
            lines.push(status_line(snap));
            if snap.ghost_hint {
                lines.push("(hint: showing the solved image)".to_string());
            }
            if snap.is_shuffling {
                lines.push("Shuffling...".to_string());
            }
            if snap.phase == GamePhase::StageCleared {
                lines.push("Stage cleared! Next puzzle incoming.".to_string());
            }
        }
        GamePhase::Won => {
            push_grid(&mut lines, snap);
            lines.push(String::new());
            if let Some(score) = snap.score {
                lines.push(format!("Solved in {} moves - score {}", snap.move_count, score));
            }
            if let Some(text) = message {
                lines.push(text.to_string());
            }
        }
        GamePhase::TimesUp => {
            lines.push("Time's up!".to_string());
            if let Some(stats) = snap.timed_stats {
                lines.push(format!(
                    "Puzzles cleared: {} ({} moves)",
                    stats.puzzles_cleared, stats.total_moves
                ));
                if let Some(avg) = stats.avg_secs_per_puzzle {
                    lines.push(format!("About {:.0}s per puzzle.", avg));
                }
            }
            if let Some(text) = message {
                lines.push(text.to_string());
            }
        }
        GamePhase::Error => {
            lines.push("Camera error - press r to reset.".to_string());
        }
    }
    lines
}

fn push_grid(lines: &mut Vec<String>, snap: &RenderSnapshot) {
    let n = snap.n as usize;
    for row in 0..n {
        let mut line = String::new();
        for col in 0..n {
            let idx = row * n + col;
            let tile = snap.tiles[idx];
            let cell = if snap.selected == Some(idx as u8) {
                format!("[{:2}]", tile)
            } else if snap.focused == idx as u8 {
                format!(">{:2}<", tile)
            } else {
                format!(" {:2} ", tile)
            };
            line.push_str(&cell);
        }
        lines.push(line);
    }
}

fn status_line(snap: &RenderSnapshot) -> String {
    let mut status = format!(
        "moves {}  hints {}  {}s",
        snap.move_count,
        snap.hint_budget,
        snap.elapsed_ms / 1000
    );
    if snap.mode == GameMode::Timed {
        if let Some(session) = snap.session {
            status.push_str(&format!(
                "  |  {}s left, {} cleared",
                (session.remaining_ms.max(0)) / 1000,
                session.puzzles_cleared
            ));
        }
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_TILE_COUNT;

    fn snapshot_3x3() -> RenderSnapshot {
        let mut tiles = [0u8; MAX_TILE_COUNT];
        for (i, t) in tiles.iter_mut().enumerate().take(9) {
            *t = i as u8;
        }
        RenderSnapshot {
            n: 3,
            tile_count: 9,
            tiles,
            phase: GamePhase::Playing,
            ..RenderSnapshot::default()
        }
    }

    #[test]
    fn test_playing_view_has_grid_rows() {
        let snap = snapshot_3x3();
        let lines = render_lines(&snap, None);
        let grid_rows: Vec<&String> = lines.iter().filter(|l| l.contains('>')).collect();
        // Focused marker on exactly one row.
        assert_eq!(grid_rows.len(), 1);
    }

    #[test]
    fn test_selected_marker() {
        let mut snap = snapshot_3x3();
        snap.selected = Some(4);
        let lines = render_lines(&snap, None);
        assert!(lines.iter().any(|l| l.contains("[ 4]")));
    }

    #[test]
    fn test_countdown_view() {
        let mut snap = snapshot_3x3();
        snap.phase = GamePhase::Countdown;
        snap.countdown = Some(2);
        assert!(render_lines(&snap, None).iter().any(|l| l.contains("2")));

        snap.countdown = Some(0);
        assert!(render_lines(&snap, None).iter().any(|l| l == "GO!"));
    }

    #[test]
    fn test_won_view_includes_victory_message() {
        let mut snap = snapshot_3x3();
        snap.phase = GamePhase::Won;
        snap.score = Some(6600);
        let lines = render_lines(&snap, Some("Nicely done!"));
        assert!(lines.iter().any(|l| l.contains("6600")));
        assert!(lines.iter().any(|l| l == "Nicely done!"));
    }
}
