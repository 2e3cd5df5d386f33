//! Logging macros for [`Message`](super::Message) values.
//!
//! The task window owns the terminal, so every macro goes through `tracing`
//! and ends up in the log file. Prefixes mirror the ones used by
//! [`Notice`](super::Notice) in the status bar.
//!
//! ```rust
//! use taskman::{msg_info, msg_error};
//! use taskman::libs::messages::Message;
//!
//! msg_info!(Message::TasksLoaded(3));
//! msg_error!(Message::TasksLoadFailed("disk I/O error".to_string()));
//! ```

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        tracing::info!("✅ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        tracing::info!("ℹ️ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        tracing::warn!("⚠️ {}", $msg)
    };
}

/// Errors are logged at `error` level; the caller decides what the user sees.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        tracing::error!("❌ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        tracing::debug!("🔍 {}", $msg)
    };
}

/// Creates an `anyhow::Error` from a message with ❌ prefix.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}
