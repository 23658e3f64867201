//! Tracing/logging setup shared by warehouse binaries.

/// Initialize process-wide logging with `info` as the fallback filter.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info");
}

/// Initialize process-wide logging, using `default_filter` when `RUST_LOG`
/// is unset or invalid.
pub fn init_with_filter(default_filter: &str) {
    tracing::init(default_filter);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
