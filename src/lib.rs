//! Umbrella crate for the IPv6 canonicalizer.
//!
//! Re-exports the pure pipeline from the `canonical` crate and adds the
//! pieces an application needs around it: structured logging per call, an
//! optional metrics observer, batch processing, file-based configuration,
//! and the reference demo table.

pub mod config;
mod demo;

pub use canonical::{
    CanonicalAddress, CanonicalizeConfig, CompressionChoice, GROUP_COUNT, GroupSequence,
    MalformedReason, NormalizedGroup, ValidationError, ZeroRun, canonicalize,
    canonicalize_address, canonicalize_ipv6, canonicalize_with_config, expand,
    find_compression_run, normalize, parse_segments, serialize, validate, zero_runs,
};

pub use crate::config::{CanonicalYamlConfig, ConfigLoadError, LoggingYamlConfig, V6CanonConfig};
pub use crate::demo::{DEMO_CASES, DemoCase, DemoOutcome, run_demo};

use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

use tracing::{Level, info, warn};

/// Metrics observer for canonicalization calls.
pub trait CanonicalMetrics: Send + Sync {
    fn record_canonicalize(&self, latency: Duration, result: Result<(), ValidationError>);
}

/// Install or clear the global canonicalization metrics recorder.
pub fn set_canonical_metrics(recorder: Option<Arc<dyn CanonicalMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn CanonicalMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn CanonicalMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn CanonicalMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Arc<dyn CanonicalMetrics>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    fn record(self, result: Result<(), ValidationError>) {
        self.recorder
            .record_canonicalize(self.start.elapsed(), result);
    }
}

/// Canonicalize one address, logging the outcome and reporting it to the
/// installed metrics recorder.
pub fn process_address(
    address: &str,
    cfg: &CanonicalizeConfig,
) -> Result<CanonicalAddress, ValidationError> {
    let start = Instant::now();
    let metrics = MetricsSpan::start();

    let span = tracing::span!(Level::DEBUG, "canonical.process", address = %address);
    let _guard = span.enter();

    match canonicalize_address(address, cfg) {
        Ok(addr) => {
            let elapsed_micros = start.elapsed().as_micros();
            info!(
                canonical = %addr.canonical,
                compressed_run = ?addr.compression.run(),
                elapsed_micros,
                "canonicalize_success"
            );
            if let Some(span) = metrics {
                span.record(Ok(()));
            }
            Ok(addr)
        }
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(
                reason = %err.reason(),
                error = %err,
                elapsed_micros,
                "canonicalize_failure"
            );
            if let Some(span) = metrics {
                span.record(Err(err.clone()));
            }
            Err(err)
        }
    }
}

/// Canonicalize every address independently, preserving input order.
/// One malformed entry does not affect the others.
pub fn process_batch<I, S>(
    addresses: I,
    cfg: &CanonicalizeConfig,
) -> Vec<Result<CanonicalAddress, ValidationError>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    addresses
        .into_iter()
        .map(|address| process_address(address.as_ref(), cfg))
        .collect()
}
