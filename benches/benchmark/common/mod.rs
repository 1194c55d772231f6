use criterion::Criterion;
use error_stamp::{Annotation, Container, Severity, StampConfig, StampPolicy};
use std::io;
use std::time::Duration;

// ============================================================================
// Fixtures
// ============================================================================

/// Policy without timestamps or stack capture.
pub fn bare_policy() -> StampPolicy {
    StampPolicy::new(StampConfig {
        enable_timestamp: false,
        stack_trace: Severity::empty(),
        ..StampConfig::default()
    })
}

/// A chain of `depth` container links ending in an I/O error.
pub fn chain(depth: usize) -> Container {
    let mut err = Container::new(Severity::ERROR, "query failed")
        .annotate(Annotation::quoted("table", "orders"))
        .annotate(Annotation::uint("rows", 0u64))
        .caused_by(io::Error::other("connection reset by peer"));

    for layer in 1..depth {
        err = Container::new(Severity::WARN, format!("layer {layer}"))
            .annotate(Annotation::uint("layer", layer))
            .caused_by(err);
    }
    err
}

// ============================================================================
// Criterion Configuration
// ============================================================================

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
