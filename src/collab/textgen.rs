//! Text-generation collaborator - celebratory victory messages.
//!
//! The request is fire-and-forget relative to the state machine: a fallback
//! message is shown immediately and replaced only if the remote result
//! arrives while the result screen is still up. The trait returns a oneshot
//! receiver that the single-threaded loop polls with `try_recv`; nothing
//! ever blocks on it. Malformed or failed responses leave the fallback in
//! place without retry.

use anyhow::Result;
use tokio::sync::oneshot;

use crate::core::game_state::FeedbackContext;

/// Shown immediately on every result screen; replaced on remote success.
pub const FALLBACK_VICTORY_TEXT: &str = "Great job! Puzzle complete.";

pub trait TextGenerator {
    /// Kick off a text request. The receiver yields at most one result;
    /// dropping it cancels interest in the outcome.
    fn request(&self, prompt: String) -> oneshot::Receiver<Result<String>>;
}

/// Build the prompt from numeric game context.
pub fn build_prompt(context: &FeedbackContext) -> String {
    match context {
        FeedbackContext::Classic {
            size,
            score,
            moves,
            elapsed_ms,
        } => format!(
            "Write one short celebratory sentence for a player who solved a \
             {n}x{n} tile puzzle in {moves} moves and {secs} seconds, scoring {score} points.",
            n = size.n(),
            moves = moves,
            secs = elapsed_ms / 1000,
            score = score,
        ),
        FeedbackContext::Timed { stats } => format!(
            "Write one short celebratory sentence for a player who cleared \
             {cleared} {n}x{n} tile puzzles in a {minutes}-minute challenge using {moves} moves.",
            cleared = stats.puzzles_cleared,
            n = stats.difficulty.n(),
            minutes = stats.duration_minutes,
            moves = stats.total_moves,
        ),
    }
}

/// Parse a response that is either plain text or a JSON array of strings.
/// Returns None for anything unusable, in which case the fallback stands.
pub fn parse_response(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('[') {
        let messages: Vec<String> = serde_json::from_str(trimmed).ok()?;
        let joined = messages
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if joined.is_empty() {
            return None;
        }
        return Some(joined);
    }
    Some(trimmed.to_string())
}

/// Demo generator: answers after a fixed delay on a tokio runtime, standing
/// in for a remote service.
pub struct CannedTextGenerator {
    handle: tokio::runtime::Handle,
    delay_ms: u64,
}

impl CannedTextGenerator {
    pub fn new(handle: tokio::runtime::Handle, delay_ms: u64) -> Self {
        Self { handle, delay_ms }
    }
}

impl TextGenerator for CannedTextGenerator {
    fn request(&self, prompt: String) -> oneshot::Receiver<Result<String>> {
        let (tx, rx) = oneshot::channel();
        let delay = self.delay_ms;
        self.handle.spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
            log::info!("canned text generator answering prompt: {}", prompt);
            // The receiver may be gone if the game was reset; that is fine.
            let _ = tx.send(Ok(
                "What a finish! That camera never stood a chance.".to_string()
            ));
        });
        rx
    }
}
