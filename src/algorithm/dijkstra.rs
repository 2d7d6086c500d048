use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{FringeRecord, FringeSet};
use crate::graph::{Graph, Weight};
use crate::trace::{RoundEvent, TraceSink};
use crate::{Error, Result};

/// What a single call to [`ShortestPathEngine::round`] left behind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The fringe still has vertices to settle
    Continue,
    /// The fringe is empty; every vertex is settled
    Finished,
}

/// Step-wise array-scan Dijkstra over a borrowed graph.
///
/// Each round settles the closest fringe vertex, relaxes the rest of the fringe
/// against it and reports a [`RoundEvent`]. A graph with V vertices takes exactly
/// V rounds; vertices the source cannot reach are settled last at infinity.
#[derive(Debug)]
pub struct ShortestPathEngine<'g, G, W>
where
    G: Graph<W> + ?Sized,
    W: Weight,
{
    graph: &'g G,
    fringe: FringeSet<W>,
    settled: Vec<FringeRecord<W>>,
    source: usize,
    rounds: usize,
}

impl<'g, G, W> ShortestPathEngine<'g, G, W>
where
    G: Graph<W> + ?Sized,
    W: Weight,
{
    /// Prepares a run from `source` with a fresh fringe covering every vertex
    pub fn new(graph: &'g G, source: usize) -> Result<Self> {
        let fringe = FringeSet::with_vertices(graph.vertex_count());
        Self::with_fringe(graph, fringe, source)
    }

    /// Prepares a run from `source` using a caller-built fringe.
    ///
    /// The fringe must be fresh: every vertex present, unreached and its own parent.
    pub fn with_fringe(graph: &'g G, mut fringe: FringeSet<W>, source: usize) -> Result<Self> {
        if fringe.capacity() != graph.vertex_count() {
            return Err(Error::InvalidArgument(format!(
                "fringe covers {} vertices but the graph has {}",
                fringe.capacity(),
                graph.vertex_count()
            )));
        }
        let untouched = fringe.len() == fringe.capacity()
            && fringe
                .iter()
                .all(|record| *record == FringeRecord::unreached(record.vertex));
        if !untouched {
            return Err(Error::InvalidArgument(
                "fringe has already been extracted from or relaxed".to_string(),
            ));
        }
        fringe.set_source(source)?;

        log::debug!(
            "starting shortest path run from vertex {} over {} vertices",
            source,
            graph.vertex_count()
        );

        Ok(ShortestPathEngine {
            graph,
            settled: Vec::with_capacity(fringe.capacity()),
            fringe,
            source,
            rounds: 0,
        })
    }

    pub fn source(&self) -> usize {
        self.source
    }

    /// Number of rounds run so far
    pub fn rounds_completed(&self) -> usize {
        self.rounds
    }

    /// Returns true once the fringe is empty
    pub fn is_finished(&self) -> bool {
        self.fringe.is_empty()
    }

    pub fn fringe(&self) -> &FringeSet<W> {
        &self.fringe
    }

    /// Records settled so far, in settle order
    pub fn settled(&self) -> &[FringeRecord<W>] {
        &self.settled
    }

    /// Runs one round and reports it to `sink`.
    ///
    /// Fails with [`Error::EmptySet`] when called after the last round.
    pub fn round<S>(&mut self, sink: &mut S) -> Result<RoundOutcome>
    where
        S: TraceSink<W> + ?Sized,
    {
        let event = self.advance()?;
        sink.on_round(&event)?;

        if event.is_final() {
            Ok(RoundOutcome::Finished)
        } else {
            Ok(RoundOutcome::Continue)
        }
    }

    /// Runs the remaining rounds and returns the final distances and parents
    pub fn compute<S>(&mut self, sink: &mut S) -> Result<ShortestPathResult<W>>
    where
        S: TraceSink<W> + ?Sized,
    {
        while !self.is_finished() {
            self.round(sink)?;
        }
        Ok(self.result())
    }

    /// Iterates over the remaining rounds, yielding each event instead of
    /// pushing it to a sink
    pub fn rounds(&mut self) -> Rounds<'_, 'g, G, W> {
        Rounds { engine: self }
    }

    /// Final distances and parents of the vertices settled so far.
    ///
    /// Vertices not settled yet are reported as unreached.
    pub fn result(&self) -> ShortestPathResult<W> {
        ShortestPathResult::from_settled(self.source, self.graph.vertex_count(), &self.settled)
    }

    fn advance(&mut self) -> Result<RoundEvent<W>> {
        let settled = self.fringe.extract_min()?;
        let relaxed = self.fringe.relax_all_against(&settled, self.graph)?;
        self.rounds += 1;
        self.settled.push(settled);

        if settled.is_reachable() {
            log::debug!(
                "round {}: settled vertex {} at distance {} via {}, relaxed {:?}",
                self.rounds,
                settled.vertex,
                settled.distance,
                settled.parent,
                relaxed
            );
        } else {
            log::debug!(
                "round {}: vertex {} is unreachable from {}",
                self.rounds,
                settled.vertex,
                self.source
            );
        }

        Ok(RoundEvent {
            round: self.rounds,
            settled,
            fringe: self.fringe.snapshot(),
            relaxed,
        })
    }
}

/// Iterator over the remaining rounds of a [`ShortestPathEngine`]
#[derive(Debug)]
pub struct Rounds<'e, 'g, G, W>
where
    G: Graph<W> + ?Sized,
    W: Weight,
{
    engine: &'e mut ShortestPathEngine<'g, G, W>,
}

impl<'e, 'g, G, W> Iterator for Rounds<'e, 'g, G, W>
where
    G: Graph<W> + ?Sized,
    W: Weight,
{
    type Item = Result<RoundEvent<W>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.engine.is_finished() {
            return None;
        }
        Some(self.engine.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.engine.fringe.len();
        (left, Some(left))
    }
}

/// Classic Dijkstra's algorithm over a dense weight matrix
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: usize,
        sink: &mut dyn TraceSink<W>,
    ) -> Result<ShortestPathResult<W>> {
        ShortestPathEngine::new(graph, source)?.compute(sink)
    }
}
