//! Terminal demo frontend - a render-collaborator stand-in.

pub mod game_view;
pub mod renderer;

pub use game_view::render_lines;
pub use renderer::TerminalRenderer;
