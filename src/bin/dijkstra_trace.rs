use std::env;
use std::io::{self, Write};

use dijkstra_trace::algorithm::dijkstra::ShortestPathEngine;
use dijkstra_trace::graph::generators::reference_graph;
use dijkstra_trace::graph::Graph;
use dijkstra_trace::trace::{write_summary, JsonLinesSink, ReportConfig, TableSink};

/// Command line options
#[derive(Debug)]
struct RunConfig {
    source: usize,
    json: bool,
    highlight: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            source: 0,
            json: false,
            highlight: true,
        }
    }
}

fn parse_args() -> Result<RunConfig, Box<dyn std::error::Error>> {
    let mut config = RunConfig::default();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => config.json = true,
            "--plain" => config.highlight = false,
            other => {
                config.source = other
                    .parse()
                    .map_err(|_| format!("expected a source vertex, got '{}'", other))?;
            }
        }
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let config = parse_args()?;
    let graph = reference_graph()?;
    log::info!(
        "Running Dijkstra from vertex {} on {} vertices / {} directed edges",
        config.source,
        graph.vertex_count(),
        graph.edge_count()
    );

    if config.json {
        let mut sink = JsonLinesSink::new(io::stdout().lock());
        let result = ShortestPathEngine::new(&graph, config.source)?.compute(&mut sink)?;
        drop(sink.into_inner()?);
        // stdout carries only the JSON lines
        write_summary(&result, io::stderr().lock())?;
        return Ok(());
    }

    let report = ReportConfig {
        highlight_settled: config.highlight,
        ..Default::default()
    };
    let mut sink = TableSink::with_config(graph.vertex_count(), report);
    let result = ShortestPathEngine::new(&graph, config.source)?.compute(&mut sink)?;

    let mut out = io::stdout().lock();
    sink.write_to(&mut out)?;
    writeln!(out)?;
    write_summary(&result, out)?;
    Ok(())
}
