use anyhow::Result;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use serde_json::json;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::dot::{project_relative, strip_bases};
use crate::core::{DelimiterKind, DependencyGraph};

/// JSON formatter with minimal tokens for programmatic consumption.
pub struct JsonCompactFormatter {
    strip_bases: Vec<String>,
    /// Include full metadata or just essential information
    minimal: bool,
}

impl JsonCompactFormatter {
    pub fn new(roots: &[PathBuf]) -> Self {
        Self {
            strip_bases: strip_bases(roots),
            minimal: true,
        }
    }

    #[allow(dead_code)]
    pub fn with_full_metadata(mut self) -> Self {
        self.minimal = false;
        self
    }

    pub fn format_to_file(&self, graph: &DependencyGraph, output_path: &Path) -> Result<()> {
        let json_content = self.format_graph(graph)?;
        fs::write(output_path, json_content)?;
        Ok(())
    }

    fn format_graph(&self, graph: &DependencyGraph) -> Result<String> {
        let node_indices: Vec<NodeIndex> = graph.node_indices().collect();

        let mut nodes = Vec::new();
        let mut node_id_map = HashMap::new();
        for (node_idx, &idx) in node_indices.iter().enumerate() {
            let id = &graph[idx];
            node_id_map.insert(idx, node_idx);

            let label = project_relative(&id.path_string(), &self.strip_bases);
            let node_json = if self.minimal {
                json!(label)
            } else {
                json!({
                    "dir": id.dir.to_string_lossy(),
                    "name": id.name,
                    "label": label,
                })
            };
            nodes.push(node_json);
        }

        let mut edges = Vec::new();
        for edge_ref in graph.edge_references() {
            let src_id = node_id_map[&edge_ref.source()];
            let tgt_id = node_id_map[&edge_ref.target()];

            let edge_json = if self.minimal {
                json!([src_id, tgt_id, self.kind_code(*edge_ref.weight())])
            } else {
                json!({
                    "src": src_id,
                    "tgt": tgt_id,
                    "kind": self.kind_name(*edge_ref.weight()),
                })
            };
            edges.push(edge_json);
        }

        let output = json!({
            "meta": {
                "nodes": graph.node_count(),
                "edges": graph.edge_count(),
                "format": if self.minimal { "compact" } else { "full" }
            },
            "nodes": nodes,
            "edges": edges
        });

        Ok(serde_json::to_string(&output)?)
    }

    fn kind_code(&self, kind: DelimiterKind) -> u8 {
        match kind {
            DelimiterKind::Angle => 0,
            DelimiterKind::Quote => 1,
        }
    }

    fn kind_name(&self, kind: DelimiterKind) -> &'static str {
        match kind {
            DelimiterKind::Angle => "angle",
            DelimiterKind::Quote => "quote",
        }
    }
}
