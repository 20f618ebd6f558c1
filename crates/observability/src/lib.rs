//! Tracing/logging setup shared by binaries and tests embedding the floor model.

pub mod subscriber;

pub use subscriber::{LogConfig, LogFormat};

/// Initialize process-wide logging from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    subscriber::init(&LogConfig::from_env());
}
