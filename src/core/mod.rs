pub mod analyzer;
pub mod graph;
pub mod resolver;
pub mod scanner;
pub mod stdlib;

pub use analyzer::ProjectAnalyzer;
pub use graph::{DelimiterKind, DependencyGraph, FileId, GraphBuilder};
pub use resolver::{resolve_reference, IncludeResolver};
pub use scanner::{FileInfo, FileKind, FileScanner};
pub use stdlib::StandardHeaders;
