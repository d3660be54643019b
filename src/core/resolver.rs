use anyhow::{bail, Result};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use super::scanner::{FileInfo, FileKind};
use super::FileId;

/// Turns a raw include token into a provisional file identity.
///
/// - A bare name refers to the including file's own directory.
/// - A token with a `..` segment keeps the token verbatim as the name,
///   anchored at the including file's directory. Such references are an
///   explicitly unresolved identity; no attempt is made to locate them on
///   disk.
/// - Any other slash-separated token is project-root-relative: the last
///   segment is the file name, the preceding segments form a relative
///   directory.
pub fn resolve_reference(token: &str, including_dir: &Path) -> FileId {
    if token.split('/').any(|segment| segment == "..") {
        return FileId::new(including_dir, token);
    }
    match token.rsplit_once('/') {
        Some((dir, name)) => FileId::new(dir, name),
        None => FileId::new(including_dir, token),
    }
}

/// Matches files discovered on disk against the project-wide set of
/// referenced identities, producing the canonical key each file is
/// represented by in the final graph.
pub struct IncludeResolver {
    table: HashMap<FileId, FileId>,
}

impl IncludeResolver {
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Rebuilds the disambiguation table from scratch.
    ///
    /// Implementation files are never referenced by other files, so they
    /// stay self-keyed. A header keyed by a reference takes the longest
    /// token whose path is a suffix of its own path; a header nothing
    /// refers to stays self-keyed. Two distinct equally-long matches are an
    /// ambiguity and fail the run.
    pub fn build_table(
        &mut self,
        files: &[FileInfo],
        referenced: &BTreeSet<FileId>,
    ) -> Result<()> {
        self.table.clear();
        for info in files {
            let key = match info.kind {
                FileKind::Implementation => info.id.clone(),
                FileKind::Header => match_header(&info.id, referenced)?,
            };
            self.table.insert(info.id.clone(), key);
        }
        Ok(())
    }

    /// Canonical key for `id`: the table entry when `id` was discovered on
    /// disk, otherwise `id` itself (a raw identity, e.g. a standard header
    /// or a reference to a file outside the scanned roots).
    pub fn canonical(&self, id: &FileId) -> FileId {
        self.table.get(id).cloned().unwrap_or_else(|| id.clone())
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for IncludeResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn match_header(id: &FileId, referenced: &BTreeSet<FileId>) -> Result<FileId> {
    let full = id.path_string();
    let mut best: Option<&FileId> = None;
    let mut best_text = String::new();
    let mut tied: Vec<&FileId> = Vec::new();

    for token in referenced {
        let text = token.path_string();
        if !is_path_suffix(&text, &full) {
            continue;
        }
        match &best {
            Some(current) if text.len() == best_text.len() && token != *current => {
                tied.push(token);
            }
            Some(_) if text.len() <= best_text.len() => {}
            _ => {
                best = Some(token);
                best_text = text;
                tied.clear();
            }
        }
    }

    if let (Some(winner), false) = (&best, tied.is_empty()) {
        let mut candidates: Vec<String> = tied.iter().map(|t| t.to_string()).collect();
        candidates.push(winner.to_string());
        candidates.sort();
        bail!(
            "ambiguous include resolution for {}: equally specific references {}",
            full,
            candidates.join(", ")
        );
    }

    Ok(best.cloned().unwrap_or_else(|| id.clone()))
}

/// Suffix match at a path-component boundary: the token must equal the full
/// path or be preceded in it by a separator, so `per.h` never claims
/// `helper.h`.
fn is_path_suffix(token: &str, full: &str) -> bool {
    if token == full {
        return true;
    }
    full.len() > token.len()
        && full.ends_with(token)
        && full.as_bytes()[full.len() - token.len() - 1] == b'/'
}
