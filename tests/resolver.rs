use incgraph::core::scanner::{FileInfo, FileKind};
use incgraph::core::{resolve_reference, FileId, IncludeResolver};
use std::collections::BTreeSet;
use std::path::Path;

fn header(dir: &str, name: &str) -> FileInfo {
    FileInfo {
        id: FileId::new(dir, name),
        kind: FileKind::Header,
    }
}

fn unit(dir: &str, name: &str) -> FileInfo {
    FileInfo {
        id: FileId::new(dir, name),
        kind: FileKind::Implementation,
    }
}

#[test]
fn bare_token_resolves_to_including_directory() {
    let id = resolve_reference("helper.h", Path::new("/proj/util"));
    assert_eq!(id, FileId::new("/proj/util", "helper.h"));
}

#[test]
fn slash_token_resolves_to_project_relative_identity() {
    let id = resolve_reference("util/helper.h", Path::new("/proj"));
    assert_eq!(id, FileId::new("util", "helper.h"));

    let nested = resolve_reference("a/b/c.h", Path::new("/proj/src"));
    assert_eq!(nested, FileId::new("a/b", "c.h"));
}

#[test]
fn parent_relative_token_stays_unresolved() {
    let id = resolve_reference("../shared/defs.h", Path::new("/proj/src"));
    assert_eq!(id, FileId::new("/proj/src", "../shared/defs.h"));
}

#[test]
fn header_takes_longest_matching_reference() {
    let files = vec![header("/proj/util", "helper.h")];
    let referenced: BTreeSet<FileId> = [
        FileId::new("util", "helper.h"),
        FileId::new("/proj/util", "helper.h"),
    ]
    .into_iter()
    .collect();

    let mut resolver = IncludeResolver::new();
    resolver.build_table(&files, &referenced).unwrap();

    // The absolute reference is the longer suffix of the header's own path.
    assert_eq!(
        resolver.canonical(&files[0].id),
        FileId::new("/proj/util", "helper.h")
    );
}

#[test]
fn header_shortens_to_a_project_relative_reference() {
    let files = vec![header("/proj/util", "helper.h")];
    let referenced: BTreeSet<FileId> =
        [FileId::new("util", "helper.h")].into_iter().collect();

    let mut resolver = IncludeResolver::new();
    resolver.build_table(&files, &referenced).unwrap();

    assert_eq!(
        resolver.canonical(&files[0].id),
        FileId::new("util", "helper.h")
    );
}

#[test]
fn suffix_matching_respects_path_component_boundaries() {
    let files = vec![header("/proj/util", "helper.h")];
    // "per.h" is a string suffix of "helper.h" but not a path suffix.
    let referenced: BTreeSet<FileId> = [FileId::new("", "per.h")].into_iter().collect();

    let mut resolver = IncludeResolver::new();
    resolver.build_table(&files, &referenced).unwrap();

    assert_eq!(
        resolver.canonical(&files[0].id),
        FileId::new("/proj/util", "helper.h")
    );
}

#[test]
fn unreferenced_header_keeps_its_own_identity() {
    let files = vec![header("/proj", "orphan.h")];
    let referenced = BTreeSet::new();

    let mut resolver = IncludeResolver::new();
    resolver.build_table(&files, &referenced).unwrap();

    assert_eq!(resolver.canonical(&files[0].id), files[0].id);
}

#[test]
fn translation_units_are_always_self_keyed() {
    let files = vec![unit("/proj", "main.cpp")];
    // Even a reference that happens to match the path does not rename a
    // translation unit.
    let referenced: BTreeSet<FileId> = [FileId::new("", "main.cpp")].into_iter().collect();

    let mut resolver = IncludeResolver::new();
    resolver.build_table(&files, &referenced).unwrap();

    assert_eq!(resolver.canonical(&files[0].id), files[0].id);
}

#[test]
fn headers_in_different_directories_stay_distinct() {
    let files = vec![header("/proj/a", "config.h"), header("/proj/b", "config.h")];
    // Both directories include "config.h" bare, so resolution produced one
    // absolute reference per directory.
    let referenced: BTreeSet<FileId> = [
        FileId::new("/proj/a", "config.h"),
        FileId::new("/proj/b", "config.h"),
    ]
    .into_iter()
    .collect();

    let mut resolver = IncludeResolver::new();
    resolver.build_table(&files, &referenced).unwrap();

    let a = resolver.canonical(&files[0].id);
    let b = resolver.canonical(&files[1].id);
    assert_ne!(a, b);
}

#[test]
fn ambiguous_equally_long_matches_are_an_error() {
    let files = vec![header("/proj/a/b", "c.h")];
    // Two distinct identities rendering the same path string.
    let referenced: BTreeSet<FileId> = [FileId::new("a/b", "c.h"), FileId::new("a", "b/c.h")]
        .into_iter()
        .collect();

    let mut resolver = IncludeResolver::new();
    let err = resolver.build_table(&files, &referenced).unwrap_err();
    assert!(err.to_string().contains("ambiguous"));
}

#[test]
fn table_build_is_idempotent() {
    let files = vec![
        header("/proj/util", "helper.h"),
        header("/proj", "orphan.h"),
        unit("/proj", "main.cpp"),
    ];
    let referenced: BTreeSet<FileId> =
        [FileId::new("util", "helper.h")].into_iter().collect();

    let mut resolver = IncludeResolver::new();
    resolver.build_table(&files, &referenced).unwrap();
    let first: Vec<FileId> = files.iter().map(|f| resolver.canonical(&f.id)).collect();

    resolver.build_table(&files, &referenced).unwrap();
    let second: Vec<FileId> = files.iter().map(|f| resolver.canonical(&f.id)).collect();

    assert_eq!(first, second);
    assert_eq!(resolver.len(), files.len());
}
