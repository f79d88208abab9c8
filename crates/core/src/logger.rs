//! Injected logging capability
//!
//! The engine never calls the global `log` macros. It holds a [`SharedLogger`] handed
//! to its constructor and writes records to that. [`GlobalLogger`] forwards to whatever
//! logger the process installed, so binaries can still use `env_logger` and friends.

use std::fmt;
use std::sync::Arc;

use log::{Level, Log, Metadata, Record};

/// Logger handle stored by the engine
pub type SharedLogger = Arc<dyn Log>;

/// Target used for every record the engine emits
pub const ENGINE_TARGET: &str = "blockfall::engine";

/// Forwards to `log::logger()`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalLogger;

impl Log for GlobalLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        log::logger().enabled(metadata)
    }

    fn log(&self, record: &Record) {
        log::logger().log(record)
    }

    fn flush(&self) {
        log::logger().flush()
    }
}

/// Handle to the process-wide logger
pub fn global() -> SharedLogger {
    Arc::new(GlobalLogger)
}

/// Write one engine record to `logger` if it accepts `level`
pub fn emit(logger: &dyn Log, level: Level, args: fmt::Arguments<'_>) {
    emit_to(logger, ENGINE_TARGET, level, args);
}

/// Write one record under `target`
pub fn emit_to(logger: &dyn Log, target: &str, level: Level, args: fmt::Arguments<'_>) {
    let metadata = Metadata::builder().level(level).target(target).build();
    if !logger.enabled(&metadata) {
        return;
    }

    logger.log(
        &Record::builder()
            .metadata(metadata)
            .args(args)
            .module_path_static(Some(module_path!()))
            .file_static(Some(file!()))
            .build(),
    );
}
