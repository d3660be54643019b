use anyhow::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::FileId;

/// How a discovered file participates in the graph: implementation files
/// (translation units) are never the target of an include, headers are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Implementation,
    Header,
}

#[derive(Debug, Clone)]
pub struct FileInfo {
    pub id: FileId,
    pub kind: FileKind,
}

/// Recursive file discovery over one or more root paths.
pub struct FileScanner;

impl FileScanner {
    pub fn new() -> Self {
        Self
    }

    /// Walks every root and returns the deduplicated, sorted set of files
    /// with a recognized C/C++ extension. A root that is itself a file is
    /// included directly when it matches. Directory contents are never
    /// opened here.
    ///
    /// Symlinked directories are not traversed, so link cycles cannot occur.
    /// Unreadable directory entries are skipped.
    pub fn discover(&self, roots: &[PathBuf]) -> Result<Vec<FileInfo>> {
        let mut found: BTreeMap<FileId, FileKind> = BTreeMap::new();

        for root in roots {
            if root.is_file() {
                Self::classify_path(root, &mut found);
                continue;
            }

            for entry in WalkDir::new(root)
                .follow_links(false)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|entry| entry.path().is_file())
            {
                Self::classify_path(entry.path(), &mut found);
            }
        }

        Ok(found
            .into_iter()
            .map(|(id, kind)| FileInfo { id, kind })
            .collect())
    }

    fn classify_path(path: &Path, found: &mut BTreeMap<FileId, FileKind>) {
        let kind = match path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(classify_extension)
        {
            Some(kind) => kind,
            None => return,
        };
        if let Some(id) = FileId::from_path(path) {
            found.entry(id).or_insert(kind);
        }
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Extension filter. Matching is case-sensitive; only the conventional
/// uppercase `.C`/`.H` variants are recognized alongside the lowercase set.
pub fn classify_extension(ext: &str) -> Option<FileKind> {
    match ext {
        "c" | "cc" | "cpp" | "cxx" | "c++" | "C" => Some(FileKind::Implementation),
        "h" | "hh" | "hpp" | "hxx" | "h++" | "H" => Some(FileKind::Header),
        _ => None,
    }
}
