//! API configuration constants

/// Default bind address
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Default word-of-the-day selection mode
pub const DEFAULT_SELECTION: &str = "random";
