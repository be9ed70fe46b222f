//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod linode;

pub use linode::LinodeProvider;
