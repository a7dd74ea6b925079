//! Session orchestration
//!
//! Creates game sessions from a random or a player-supplied word and
//! exposes the single active session to a front-end.

mod session_manager;
mod source;

pub use session_manager::{DEFAULT_MAX_ERRORS, SessionManager};
pub use source::WordSource;
