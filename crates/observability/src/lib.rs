//! Process-wide tracing setup shared by the binaries.

pub mod tracing;

/// Initialize tracing for the process.
///
/// Safe to call multiple times; later calls are no-ops.
pub fn init() {
    tracing::init(tracing::DEFAULT_FILTER);
}
