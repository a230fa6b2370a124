//! CLI command handlers.

/// Signature listing and inspection.
pub mod patterns;
/// Full-history scanning for secrets in past commits.
pub mod scan;

/// Convenience alias for command return types.
pub type Result<T = ()> = anyhow::Result<T>;
