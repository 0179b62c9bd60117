//! Page modules for the two screens.
//!
//! ARCHITECTURE
//! ============
//! The app shows exactly one page at a time: username entry until a name is
//! set, then the chat. Pages own screen-level orchestration and delegate
//! rendering details to `components`.

pub mod chat;
pub mod username;
