use petgraph::{
    graph::{EdgeIndex, NodeIndex},
    Directed, Graph,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Delimiter style of an include directive. Informational only: resolution
/// treats both spellings identically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Copy)]
pub enum DelimiterKind {
    Angle,
    Quote,
}

/// Identity of a file inside the project: a (directory, name) pair.
///
/// Directories of files discovered on disk are absolute; directories of
/// root-relative include references stay relative until disambiguation.
/// Equality and ordering are structural over both components.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId {
    pub dir: PathBuf,
    pub name: String,
}

impl FileId {
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
        }
    }

    /// Identity of a concrete path on disk.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_string();
        let dir = path.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
        Some(Self { dir, name })
    }

    pub fn path(&self) -> PathBuf {
        if self.dir.as_os_str().is_empty() {
            PathBuf::from(&self.name)
        } else {
            self.dir.join(&self.name)
        }
    }

    /// Path rendered as a string, used for suffix matching and node labels.
    pub fn path_string(&self) -> String {
        self.path().to_string_lossy().into_owned()
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_string())
    }
}

pub type DependencyGraph = Graph<FileId, DelimiterKind, Directed>;

pub struct GraphBuilder {
    graph: DependencyGraph,
    node_map: HashMap<FileId, NodeIndex>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            node_map: HashMap::new(),
        }
    }

    /// Adds a node for `id`, returning the existing index if one is already
    /// present. Insertion order determines iteration order downstream.
    pub fn add_node(&mut self, id: FileId) -> NodeIndex {
        if let Some(&index) = self.node_map.get(&id) {
            return index;
        }
        let index = self.graph.add_node(id.clone());
        self.node_map.insert(id, index);
        index
    }

    /// Adds an edge between two existing nodes. Returns `None` when either
    /// endpoint is missing. Self-loops are valid.
    pub fn add_edge(
        &mut self,
        source: &FileId,
        target: &FileId,
        kind: DelimiterKind,
    ) -> Option<EdgeIndex> {
        let source_idx = self.node_map.get(source)?;
        let target_idx = self.node_map.get(target)?;
        Some(self.graph.add_edge(*source_idx, *target_idx, kind))
    }

    pub fn build(self) -> DependencyGraph {
        self.graph
    }

    #[allow(dead_code)]
    pub fn get_node_index(&self, id: &FileId) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
