use anyhow::Result;
use petgraph::visit::EdgeRef;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{DependencyGraph, FileId};

/// Renders the final mapping as a plain-text undirected graph description:
///
/// ```text
/// graph {
///     "main.cpp" -- "util/helper.h";
/// }
/// ```
///
/// One line per edge, in graph iteration order. Node labels are path
/// strings with every configured root's absolute prefix stripped, so labels
/// are project-relative. The output file is overwritten if it exists.
pub struct DotFormatter {
    strip_bases: Vec<String>,
}

impl DotFormatter {
    /// `roots` are the canonicalized input paths; a root that is a file
    /// contributes its parent directory as a strip base.
    pub fn new(roots: &[PathBuf]) -> Self {
        Self {
            strip_bases: strip_bases(roots),
        }
    }

    pub fn format_to_file(&self, graph: &DependencyGraph, output_path: &Path) -> Result<()> {
        fs::write(output_path, self.format_graph(graph))?;
        Ok(())
    }

    pub fn format_graph(&self, graph: &DependencyGraph) -> String {
        let mut out = String::from("graph {\n");
        for edge in graph.edge_references() {
            let source = &graph[edge.source()];
            let target = &graph[edge.target()];
            out.push_str(&format!(
                "\t\"{}\" -- \"{}\";\n",
                self.label(source),
                self.label(target)
            ));
        }
        out.push_str("}\n");
        out
    }

    fn label(&self, id: &FileId) -> String {
        project_relative(&id.path_string(), &self.strip_bases)
    }
}

pub(crate) fn strip_bases(roots: &[PathBuf]) -> Vec<String> {
    roots
        .iter()
        .map(|root| {
            if root.is_file() {
                root.parent().unwrap_or_else(|| Path::new("")).to_path_buf()
            } else {
                root.clone()
            }
        })
        .map(|base| base.to_string_lossy().into_owned())
        .collect()
}

/// Strips the longest matching base prefix, so nested roots yield the
/// shortest label.
pub(crate) fn project_relative(path: &str, bases: &[String]) -> String {
    let mut best: Option<&str> = None;
    for base in bases {
        if let Some(rest) = path.strip_prefix(base.as_str()) {
            if let Some(rest) = rest.strip_prefix('/') {
                if best.map_or(true, |current| rest.len() < current.len()) {
                    best = Some(rest);
                }
            }
        }
    }
    best.unwrap_or(path).to_string()
}
