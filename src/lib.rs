//! # INCGRAPH
//!
//! Fast C/C++ include dependency graph extraction.
//!
//! INCGRAPH walks a project tree, extracts `#include` (and digraph
//! `%:include`) references with a comment-aware scanner, resolves each raw
//! token to a stable file identity, reconciles discovered files against the
//! project-wide reference set, and exports the resulting dependency graph.
//!
//! ## Output Formats
//!
//! - **Dot**: plain-text undirected graph description, one line per edge
//! - **JSON-Compact**: minimal token format for programmatic consumption
//!
//! ## Recognized Extensions
//!
//! `.c .cc .cpp .cxx .c++ .C` (implementation), `.h .hh .hpp .hxx .h++ .H`
//! (header); matching is case-sensitive.

pub mod core;
pub mod formatters;
pub mod parsers;
