//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat` for identity and history, `ui` for
//! theme) and held in `RwSignal`s provided via context. Both are plain
//! structs whose mutations take the persistence layer as an argument, so
//! they run unchanged in native tests.

pub mod chat;
pub mod ui;
