//! Progress reporting for relaxation runs.

use std::time::Duration;

/// Receiver for relaxation progress events.
///
/// The driver pushes everything a caller might want to surface (start, completion, the
/// excessive-iteration advisory) through this trait, so the engine needs no console to run.
pub trait ProgressSink {
    /// A run is starting over `discs` discs, checking `pairs` pairs per iteration.
    fn started(&mut self, discs: usize, pairs: usize);

    /// The run reached its fixed point.
    fn finished(&mut self, iterations: u32, elapsed: Duration);

    /// The pass count exceeded the configured advisory threshold. The run keeps going; this fires
    /// at most once per run.
    fn excessive_iterations(&mut self, iterations: u32);
}

/// Sink that forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ProgressSink for TracingSink {
    fn started(&mut self, discs: usize, pairs: usize) {
        tracing::info!(discs, pairs, "removing disc collisions");
    }

    fn finished(&mut self, iterations: u32, elapsed: Duration) {
        tracing::info!(iterations, ?elapsed, "disc relaxation converged");
    }

    fn excessive_iterations(&mut self, iterations: u32) {
        tracing::warn!(
            iterations,
            "relaxation is iterating heavily; too many or too large discs on too small an area may \
             not converge soon"
        );
    }
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn started(&mut self, _discs: usize, _pairs: usize) {}

    fn finished(&mut self, _iterations: u32, _elapsed: Duration) {}

    fn excessive_iterations(&mut self, _iterations: u32) {}
}
