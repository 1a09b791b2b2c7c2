//! Logging utilities
//!
//! Thin wrappers over the `log` facade. Native builds log wherever the host
//! installed a logger; the browser client routes them to the console.

#![allow(unused)]

const TARGET: &str = "gachapon";

/// Log an info message
#[inline]
pub fn info(msg: &str) {
    ::log::info!(target: TARGET, "{msg}");
}

/// Log a warning message
#[inline]
pub fn warn(msg: &str) {
    ::log::warn!(target: TARGET, "{msg}");
}

/// Log an error message
#[inline]
pub fn error(msg: &str) {
    ::log::error!(target: TARGET, "{msg}");
}

/// Log a debug message with a label
#[inline]
pub fn debug(label: &str, msg: &str) {
    ::log::debug!(target: TARGET, "[{label}] {msg}");
}

/// Log an action being performed
#[inline]
pub fn action(name: &str, details: &str) {
    ::log::info!(target: TARGET, "ACTION {name}: {details}");
}

/// Log action result
#[inline]
pub fn result(success: bool, msg: &str) {
    if success {
        ::log::debug!(target: TARGET, "OK {msg}");
    } else {
        ::log::warn!(target: TARGET, "FAILED {msg}");
    }
}
