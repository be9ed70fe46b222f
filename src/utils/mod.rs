//! Utility modules.

/// Date/time serialization helpers for provider timestamps.
pub mod datetime;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
