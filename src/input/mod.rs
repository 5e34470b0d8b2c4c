//! Input mapping - pointer math and key bindings.

pub mod handler;
pub mod mapper;

pub use handler::{map_key, should_quit, EngineInput};
pub use mapper::{move_focus, pointer_to_index};
