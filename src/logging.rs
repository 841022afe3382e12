//! `log` sink for the page
//!
//! In the browser records go to the developer console at the matching
//! severity; natively they go to stderr.

#[cfg(feature = "wasm")]
use log::Level;
use log::{LevelFilter, Log, Metadata, Record};

pub struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());

        #[cfg(feature = "wasm")]
        {
            let value = wasm_bindgen::JsValue::from_str(&line);
            match record.level() {
                Level::Error => web_sys::console::error_1(&value),
                Level::Warn => web_sys::console::warn_1(&value),
                Level::Info => web_sys::console::info_1(&value),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
            }
        }

        #[cfg(not(feature = "wasm"))]
        eprintln!("{line}");
    }

    fn flush(&self) {}
}

/// Install [`ConsoleLogger`] as the global logger
///
/// Calling it again only changes the level.
pub fn init_logger(level: LevelFilter) {
    if log::set_boxed_logger(Box::new(ConsoleLogger)).is_err() {
        log::debug!("logger already installed");
    }
    log::set_max_level(level);
}
