use incgraph::core::{DelimiterKind, FileId, GraphBuilder};
use incgraph::formatters::JsonCompactFormatter;
use std::fs;
use std::path::PathBuf;

fn sample_graph() -> incgraph::core::DependencyGraph {
    let mut gb = GraphBuilder::new();
    let main = FileId::new("/proj", "main.cpp");
    let helper = FileId::new("util", "helper.h");
    let vector = FileId::new("/proj", "vector");
    gb.add_node(main.clone());
    gb.add_node(helper.clone());
    gb.add_node(vector.clone());
    gb.add_edge(&main, &helper, DelimiterKind::Quote);
    gb.add_edge(&main, &vector, DelimiterKind::Angle);
    gb.build()
}

#[test]
fn compact_output_has_meta_nodes_and_edges() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("deps.json");

    JsonCompactFormatter::new(&[PathBuf::from("/proj")])
        .format_to_file(&sample_graph(), &out)
        .unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();

    assert_eq!(parsed["meta"]["nodes"], 3);
    assert_eq!(parsed["meta"]["edges"], 2);
    assert_eq!(parsed["meta"]["format"], "compact");

    let nodes: Vec<&str> = parsed["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n.as_str().unwrap())
        .collect();
    assert_eq!(nodes, vec!["main.cpp", "util/helper.h", "vector"]);

    let edges = parsed["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 2);
    // [source index, target index, delimiter code]
    assert_eq!(edges[0], serde_json::json!([0, 1, 1]));
    assert_eq!(edges[1], serde_json::json!([0, 2, 0]));
}

#[test]
fn full_output_carries_identity_components() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("deps.json");

    JsonCompactFormatter::new(&[PathBuf::from("/proj")])
        .with_full_metadata()
        .format_to_file(&sample_graph(), &out)
        .unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();

    assert_eq!(parsed["meta"]["format"], "full");
    assert_eq!(parsed["nodes"][0]["name"], "main.cpp");
    assert_eq!(parsed["nodes"][0]["dir"], "/proj");
    assert_eq!(parsed["nodes"][1]["label"], "util/helper.h");
    assert_eq!(parsed["edges"][0]["kind"], "quote");
    assert_eq!(parsed["edges"][1]["kind"], "angle");
}
