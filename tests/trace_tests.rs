use dijkstra_trace::algorithm::dijkstra::ShortestPathEngine;
use dijkstra_trace::graph::generators::{from_undirected_edges, reference_graph};
use dijkstra_trace::trace::{
    write_summary, JsonLinesSink, NullSink, ReportConfig, RoundEvent, TableSink, TraceSink,
};
use dijkstra_trace::{Error, Result};

fn plain() -> ReportConfig {
    ReportConfig {
        highlight_settled: false,
        ..Default::default()
    }
}

#[test]
fn test_table_with_unreachable_vertex() {
    let graph = from_undirected_edges(3, &[(0, 1, 2)]).unwrap();
    let mut table = TableSink::with_config(3, plain());
    ShortestPathEngine::new(&graph, 0)
        .unwrap()
        .compute(&mut table)
        .unwrap();

    let expected = [
        "  | v0   | v1   | v2",
        "1 | 0/v0 | 2    | Infinity",
        "2 |      | 2/v0 | Infinity",
        "3 |      |      | Infinity/v2",
    ]
    .join("\n")
        + "\n";

    assert_eq!(table.round_count(), 3);
    assert_eq!(table.render(), expected);
}

#[test]
fn test_table_for_reference_graph() {
    let graph = reference_graph().unwrap();
    let mut table = TableSink::with_config(6, plain());
    ShortestPathEngine::new(&graph, 0)
        .unwrap()
        .compute(&mut table)
        .unwrap();

    let rendered = table.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[0].contains("v5"));
    assert!(lines[1].starts_with("1 | 0/v0 | 1 "));
    assert!(lines[4].contains("4/v2"));
    assert!(lines[6].starts_with("6 |"));
    assert!(lines[6].ends_with("9/v3"));

    let mut out = Vec::new();
    table.write_to(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), rendered);
}

#[test]
fn test_table_custom_labels() {
    let graph = from_undirected_edges(2, &[]).unwrap();
    let config = ReportConfig {
        vertex_prefix: "n".to_string(),
        infinity_label: "-".to_string(),
        highlight_settled: false,
    };
    let mut table = TableSink::with_config(2, config);
    ShortestPathEngine::new(&graph, 1)
        .unwrap()
        .compute(&mut table)
        .unwrap();

    assert_eq!(table.render(), "  | n0   | n1\n1 | -    | 0/n1\n2 | -/n0\n");
}

#[test]
fn test_table_rows_have_no_trailing_separator() {
    let graph = reference_graph().unwrap();
    let mut table = TableSink::with_config(6, plain());
    ShortestPathEngine::new(&graph, 5)
        .unwrap()
        .compute(&mut table)
        .unwrap();

    let rendered = table.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[1].ends_with("0/v5"));
    for line in &lines[2..] {
        assert!(!line.ends_with('|') && !line.ends_with(' '), "dangling cell in {:?}", line);
    }
}

#[test]
fn test_summary_lists_paths_and_unreachable_vertices() {
    let graph = from_undirected_edges(3, &[(0, 1, 2)]).unwrap();
    let result = ShortestPathEngine::new(&graph, 0)
        .unwrap()
        .compute(&mut NullSink)
        .unwrap();

    let mut out = Vec::new();
    write_summary(&result, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "v0: distance = 0, path = [0]\nv1: distance = 2, path = [0, 1]\nv2: unreachable\n"
    );
}

#[test]
fn test_table_rejects_foreign_vertices() {
    let graph = reference_graph().unwrap();
    let mut table = TableSink::new(3);
    let result = ShortestPathEngine::new(&graph, 0).unwrap().compute(&mut table);
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn test_json_lines_sink() {
    let graph = from_undirected_edges(2, &[(0, 1, 4)]).unwrap();
    let mut sink = JsonLinesSink::new(Vec::new());
    ShortestPathEngine::new(&graph, 0)
        .unwrap()
        .compute(&mut sink)
        .unwrap();

    let output = String::from_utf8(sink.into_inner().unwrap()).unwrap();
    let lines: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        serde_json::json!({
            "round": 1,
            "settled": { "vertex": 0, "distance": 0, "parent": 0 },
            "fringe": [[1, 4]],
            "relaxed": [1],
        })
    );
    assert_eq!(lines[1]["settled"]["parent"], 0);
    assert_eq!(lines[1]["fringe"], serde_json::json!([]));
}

#[test]
fn test_closure_sink_and_error_propagation() {
    let graph = reference_graph().unwrap();

    let mut settled = Vec::new();
    let mut collect = |event: &RoundEvent<u64>| -> Result<()> {
        settled.push(event.settled.vertex);
        Ok(())
    };
    ShortestPathEngine::new(&graph, 0)
        .unwrap()
        .compute(&mut collect)
        .unwrap();
    assert_eq!(settled, vec![0, 1, 2, 4, 3, 5]);

    let mut failing = |event: &RoundEvent<u64>| -> Result<()> {
        if event.round == 2 {
            return Err(Error::InvalidArgument("stop".to_string()));
        }
        Ok(())
    };
    let mut engine = ShortestPathEngine::new(&graph, 0).unwrap();
    assert!(engine.compute(&mut failing).is_err());
    assert_eq!(engine.rounds_completed(), 2);
}

#[test]
fn test_dyn_sink() {
    let graph = reference_graph().unwrap();
    let mut table = TableSink::new(6);
    let sink: &mut dyn TraceSink<u64> = &mut table;
    ShortestPathEngine::new(&graph, 0).unwrap().compute(sink).unwrap();
    assert_eq!(table.round_count(), 6);
}
