//! Logging helpers
//!
//! Thin wrappers over the `log` facade so every component logs with the
//! same shape. Nothing is printed unless the host installs a logger.

#![allow(unused)]

use core::fmt::Display;

use crate::types::Stage;

/// Log an info message
#[inline]
pub fn info(msg: &str) {
    ::log::info!(target: "memory", "{}", msg);
}

/// Log a warning message
#[inline]
pub fn warn(msg: &str) {
    ::log::warn!(target: "memory", "{}", msg);
}

/// Log an error message
#[inline]
pub fn error(msg: &str) {
    ::log::error!(target: "memory", "{}", msg);
}

/// Log a debug message with a label
#[inline]
pub fn debug(label: &str, msg: &str) {
    ::log::debug!(target: "memory", "[{}] {}", label, msg);
}

/// Log an action being performed
#[inline]
pub fn action(name: &str, details: impl Display) {
    ::log::debug!(target: "memory", "action {} {}", name, details);
}

/// Log an action that was rejected without changing state
#[inline]
pub fn rejected(name: &str, reason: impl Display) {
    ::log::debug!(target: "memory", "rejected {}: {}", name, reason);
}

/// Log a stage transition
#[inline]
pub fn stage_change(from: Stage, to: Stage) {
    ::log::info!(target: "memory", "stage {} -> {}", from.as_str(), to.as_str());
}
