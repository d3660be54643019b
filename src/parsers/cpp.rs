use anyhow::Result;
use regex::Regex;
use std::path::Path;

use super::common::read_source;
use crate::core::DelimiterKind;

/// One include reference as written in the source, delimiters stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeDirective {
    pub token: String,
    pub kind: DelimiterKind,
    pub line: usize,
}

/// Comment state threaded by value through the scan loop, so scanning one
/// file shares nothing with scanning another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Normal,
    InBlockComment,
}

/// Line-oriented extraction of `#include` / `%:include` directives from
/// C/C++ source text, skipping block and line comments.
///
/// Parsing is best-effort: a directive line without a `<...>` or `"..."`
/// span is silently dropped, and comment openers inside string literals are
/// not recognized.
pub struct IncludeScanner {
    span_re: Regex,
}

impl IncludeScanner {
    pub fn new() -> Self {
        // First delimited span on the line, shortest match; group 1 angle,
        // group 2 quote.
        let span_re = Regex::new(r#"<([^<>]*)>|"([^"]*)""#).expect("include span pattern");
        Self { span_re }
    }

    pub fn scan_file(&self, file_path: &Path) -> Result<Vec<IncludeDirective>> {
        let source = read_source(file_path)?;
        Ok(self.scan_source(&source))
    }

    /// Returns every include directive in `source`, in order of appearance.
    pub fn scan_source(&self, source: &str) -> Vec<IncludeDirective> {
        let mut directives = Vec::new();
        let mut state = ScanState::Normal;
        for (idx, line) in source.lines().enumerate() {
            state = self.scan_fragment(line, idx + 1, state, &mut directives);
        }
        directives
    }

    /// Processes one line (or the remainder of one after a comment marker)
    /// and returns the state the next line starts in.
    ///
    /// A directive line is consumed whole: trailing `//` or `/*` on it is
    /// not tracked. A block comment that opens and closes on the same line
    /// hands the remainder straight back to normal scanning, so
    /// `/* x */ #include "a.h"` still yields `a.h`.
    fn scan_fragment(
        &self,
        fragment: &str,
        line: usize,
        state: ScanState,
        out: &mut Vec<IncludeDirective>,
    ) -> ScanState {
        match state {
            ScanState::InBlockComment => match fragment.find("*/") {
                Some(pos) => {
                    self.scan_fragment(&fragment[pos + 2..], line, ScanState::Normal, out)
                }
                None => ScanState::InBlockComment,
            },
            ScanState::Normal => {
                if fragment.trim_start().starts_with("//") {
                    return ScanState::Normal;
                }
                if is_directive(fragment) {
                    if let Some(directive) = self.extract_token(fragment, line) {
                        out.push(directive);
                    }
                    return ScanState::Normal;
                }
                match fragment.find("/*") {
                    Some(pos) => self.scan_fragment(
                        &fragment[pos + 2..],
                        line,
                        ScanState::InBlockComment,
                        out,
                    ),
                    None => ScanState::Normal,
                }
            }
        }
    }

    fn extract_token(&self, fragment: &str, line: usize) -> Option<IncludeDirective> {
        let captures = self.span_re.captures(fragment)?;
        let (token, kind) = if let Some(angle) = captures.get(1) {
            (angle.as_str(), DelimiterKind::Angle)
        } else {
            (captures.get(2)?.as_str(), DelimiterKind::Quote)
        };
        if token.is_empty() {
            return None;
        }
        Some(IncludeDirective {
            token: token.to_string(),
            kind,
            line,
        })
    }
}

impl Default for IncludeScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Directive recognition strips every whitespace character before comparing
/// prefixes, so `# include` and `  #  include` are accepted exactly like
/// `#include`. The `%:include` digraph spelling is equivalent.
fn is_directive(fragment: &str) -> bool {
    let squeezed: String = fragment.chars().filter(|c| !c.is_whitespace()).collect();
    squeezed.starts_with("#include") || squeezed.starts_with("%:include")
}
