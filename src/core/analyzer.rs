use anyhow::Result;
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use super::graph::{DelimiterKind, GraphBuilder};
use super::resolver::resolve_reference;
use super::scanner::FileInfo;
use super::{DependencyGraph, FileId, FileScanner, IncludeResolver, StandardHeaders};
use crate::parsers::IncludeScanner;

/// Whole-pipeline driver: discovery, parallel include extraction, reference
/// resolution, disambiguation, filtering and graph assembly.
pub struct ProjectAnalyzer {
    file_scanner: FileScanner,
    include_scanner: IncludeScanner,
    std_headers: StandardHeaders,
    keep_std: bool,
}

impl ProjectAnalyzer {
    pub fn new(std_headers: StandardHeaders, keep_std: bool) -> Self {
        Self {
            file_scanner: FileScanner::new(),
            include_scanner: IncludeScanner::new(),
            std_headers,
            keep_std,
        }
    }

    /// Runs the pipeline over `roots` (expected to be canonicalized) and
    /// returns the assembled dependency graph.
    pub fn analyze(&self, roots: &[PathBuf]) -> Result<DependencyGraph> {
        println!("Scanning files...");
        let mut files = self.file_scanner.discover(roots)?;
        if !self.keep_std {
            // Standard-named files are neither scanned nor present as nodes.
            files.retain(|info| !self.std_headers.contains(&info.id.name));
        }
        println!("Found {} files to analyze", files.len());

        println!("Extracting include directives...");
        let scan_results: Vec<(&FileInfo, Result<Vec<_>>)> = files
            .par_iter()
            .map(|info| (info, self.include_scanner.scan_file(&info.id.path())))
            .collect();

        let mut skipped = 0usize;
        let mut directive_count = 0usize;
        let mut deps: BTreeMap<FileId, BTreeMap<FileId, DelimiterKind>> = BTreeMap::new();
        for (info, result) in scan_results {
            let directives = match result {
                Ok(directives) => directives,
                Err(err) => {
                    eprintln!(
                        "Warning: failed to read {}: {}; skipping",
                        info.id.path().display(),
                        err
                    );
                    skipped += 1;
                    continue;
                }
            };
            directive_count += directives.len();
            let file_deps = deps.entry(info.id.clone()).or_default();
            for directive in directives {
                let resolved = resolve_reference(&directive.token, &info.id.dir);
                file_deps.entry(resolved).or_insert(directive.kind);
            }
        }
        println!(
            "Extracted {} directives from {} files ({} unreadable, skipped)",
            directive_count,
            deps.len(),
            skipped
        );

        println!("Resolving references...");
        let referenced: BTreeSet<FileId> = deps
            .values()
            .flat_map(|file_deps| file_deps.keys().cloned())
            .collect();

        let mut resolver = IncludeResolver::new();
        resolver.build_table(&files, &referenced)?;

        println!("Building dependency graph...");
        let mut builder = GraphBuilder::new();
        for info in &files {
            builder.add_node(resolver.canonical(&info.id));
        }
        for (file_id, file_deps) in &deps {
            let source = resolver.canonical(file_id);
            let mut targets: BTreeMap<FileId, DelimiterKind> = BTreeMap::new();
            for (dep, kind) in file_deps {
                if !self.keep_std && self.std_headers.contains(&dep.name) {
                    continue;
                }
                targets.entry(resolver.canonical(dep)).or_insert(*kind);
            }
            for (target, kind) in targets {
                builder.add_node(target.clone());
                builder.add_edge(&source, &target, kind);
            }
        }

        Ok(builder.build())
    }
}
