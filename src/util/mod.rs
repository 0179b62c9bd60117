//! Utility helpers shared across state and UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-only concerns (DOM theme attribute, `confirm()`, wall clock) live
//! here behind `csr` so pages and state stay testable natively.

pub mod clock;
pub mod color;
pub mod dialog;
pub mod text;
pub mod theme;
