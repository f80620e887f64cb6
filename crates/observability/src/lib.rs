//! Tracing/logging setup shared by stagebill binaries.
//!
//! Domain crates stay log-free; only process entry points call [`init`].

/// Tracing configuration (filters, output format).
pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
