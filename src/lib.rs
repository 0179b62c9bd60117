//! # localchat
//!
//! Leptos + WASM single-page chat that keeps its history in browser
//! `localStorage` and mirrors changes across open tabs through `storage`
//! events. There is no server: every tab of the same origin reads and writes
//! the same three records (theme, username, message list).
//!
//! The model (`store`, `state`, `sync`, `view`) is plain Rust and tested
//! natively. Browser glue is gated behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod state;
pub mod store;
pub mod sync;
pub mod util;
pub mod view;
