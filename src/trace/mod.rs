//! Round events emitted by the engine and the sinks that consume them.
//!
//! The engine only knows about [`TraceSink`]; how a round is rendered is up to the
//! sink. Closures taking a `&RoundEvent` work as sinks too.

pub mod json;
pub mod table;

use serde::Serialize;

use crate::data_structures::FringeRecord;
use crate::Result;

pub use json::JsonLinesSink;
pub use table::{write_summary, ReportConfig, TableSink};

/// Snapshot of one engine round, taken after relaxation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundEvent<W> {
    /// Round number, starting at 1
    pub round: usize,

    /// Vertex settled this round with its final distance and parent
    pub settled: FringeRecord<W>,

    /// (vertex, tentative distance) for every vertex still unsettled, by vertex id
    pub fringe: Vec<(usize, W)>,

    /// Vertices whose tentative distance was lowered this round, ascending
    pub relaxed: Vec<usize>,
}

impl<W> RoundEvent<W> {
    /// Returns true if this was the last round
    pub fn is_final(&self) -> bool {
        self.fringe.is_empty()
    }

    /// Tentative distance of an unsettled vertex as of this round
    pub fn tentative_distance(&self, vertex: usize) -> Option<&W> {
        self.fringe
            .binary_search_by_key(&vertex, |(v, _)| *v)
            .ok()
            .map(|idx| &self.fringe[idx].1)
    }
}

/// Receiver of round events
pub trait TraceSink<W> {
    /// Called once per round, right after the settled vertex's neighbours are relaxed
    fn on_round(&mut self, event: &RoundEvent<W>) -> Result<()>;
}

impl<W, F> TraceSink<W> for F
where
    F: FnMut(&RoundEvent<W>) -> Result<()>,
{
    fn on_round(&mut self, event: &RoundEvent<W>) -> Result<()> {
        self(event)
    }
}

/// Sink that drops every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl<W> TraceSink<W> for NullSink {
    fn on_round(&mut self, _event: &RoundEvent<W>) -> Result<()> {
        Ok(())
    }
}

/// Sink that keeps every event in memory
#[derive(Debug, Clone)]
pub struct VecSink<W> {
    events: Vec<RoundEvent<W>>,
}

impl<W> VecSink<W> {
    pub fn new() -> Self {
        VecSink { events: Vec::new() }
    }

    pub fn events(&self) -> &[RoundEvent<W>] {
        &self.events
    }

    pub fn into_events(self) -> Vec<RoundEvent<W>> {
        self.events
    }
}

impl<W> Default for VecSink<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Clone> TraceSink<W> for VecSink<W> {
    fn on_round(&mut self, event: &RoundEvent<W>) -> Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}
