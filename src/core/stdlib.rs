use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

const C_HEADERS: &str = include_str!("../../data/c_headers.txt");
const CPP_HEADERS: &str = include_str!("../../data/cpp_headers.txt");

/// Immutable set of bare standard-library header names, loaded once per run
/// and used only as a filter predicate.
pub struct StandardHeaders {
    names: HashSet<String>,
}

impl StandardHeaders {
    /// Parses two newline-delimited name lists (C and C++). Entries are
    /// trimmed; blank lines are ignored.
    pub fn from_lists(c_list: &str, cpp_list: &str) -> Self {
        let names = c_list
            .lines()
            .chain(cpp_list.lines())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        Self { names }
    }

    /// The header lists shipped with the binary.
    pub fn bundled() -> Self {
        Self::from_lists(C_HEADERS, CPP_HEADERS)
    }

    /// Bundled lists with either replaced by a file supplied on the
    /// command line.
    pub fn load(c_override: Option<&Path>, cpp_override: Option<&Path>) -> Result<Self> {
        let c_list = match c_override {
            Some(path) => read_list(path)?,
            None => C_HEADERS.to_string(),
        };
        let cpp_list = match cpp_override {
            Some(path) => read_list(path)?,
            None => CPP_HEADERS.to_string(),
        };
        Ok(Self::from_lists(&c_list, &cpp_list))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn read_list(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read header list {}", path.display()))
}
