//! Page implementations
//!
//! `memory` models the document without a browser, `terminal` backs the
//! native driver and `web` binds the real document under WASM.

pub mod memory;

#[cfg(feature = "no-wasm")]
pub mod terminal;

#[cfg(feature = "wasm")]
pub mod web;
