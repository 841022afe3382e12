pub mod app;
pub mod client;
pub mod config;
pub mod dom;
pub mod error;
pub mod interface;
pub mod logging;
pub mod markup;
pub mod model;

pub use app::{AddStudent, DeleteConfirmation, SubmitDecision, SubmitOutcome};
pub use config::PageConfig;

#[cfg(feature = "no-wasm")]
pub use client::request::NoWasmClient;
#[cfg(feature = "wasm")]
pub use client::gloo::WasmClient;
