//! External collaborator boundaries.
//!
//! The engine core never performs I/O; these traits are the seams where the
//! surrounding application plugs in live video capture, persistent storage,
//! and the remote text-generation service. Stub implementations back the
//! terminal demo and the tests.

pub mod storage;
pub mod textgen;
pub mod video;

pub use storage::{FileStorage, MemoryStorage, Storage};
pub use textgen::{CannedTextGenerator, TextGenerator};
pub use video::{StubVideoSource, VideoSource};
