use super::verify;
use crate::catalog::{AlbumRecord, CATALOG};
use crate::config::PathSettings;
use crate::error::GenerateError;
use crate::generate::generate;
use crate::tags::{Id3v2Writer, TagWriter, TrackTags};
use crate::test_support::write_silent_mp3;
use std::fs;
use tempfile::tempdir;

fn portishead() -> &'static [AlbumRecord] {
    &CATALOG[2..3]
}

fn generated(root: &std::path::Path) -> PathSettings {
    let source = root.join("template.mp3");
    write_silent_mp3(&source);
    let paths = PathSettings {
        source,
        destination: root.join("Music"),
    };
    generate(&paths, portishead(), &Id3v2Writer).unwrap();
    paths
}

#[test]
fn verify_counts_every_track() {
    let dir = tempdir().unwrap();
    let paths = generated(dir.path());
    assert_eq!(verify(&paths.destination, portishead()).unwrap(), 11);
}

#[test]
fn verify_reports_missing_file() {
    let dir = tempdir().unwrap();
    let paths = generated(dir.path());
    let gone = paths
        .destination
        .join("Portishead")
        .join("Dummy")
        .join("11 Glory Box.mp3");
    fs::remove_file(&gone).unwrap();

    match verify(&paths.destination, portishead()).unwrap_err() {
        GenerateError::VerifyMismatch { path, field, .. } => {
            assert_eq!(path, gone);
            assert_eq!(field, "file");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn verify_reports_retagged_title() {
    let dir = tempdir().unwrap();
    let paths = generated(dir.path());
    let sour = paths
        .destination
        .join("Portishead")
        .join("Dummy")
        .join("02 Sour Times.mp3");

    let mut wrong = TrackTags::for_track(&portishead()[0], 2, "Sour Times");
    wrong.title = "Sweet Times".to_string();
    Id3v2Writer.write_tags(&sour, &wrong).unwrap();

    match verify(&paths.destination, portishead()).unwrap_err() {
        GenerateError::VerifyMismatch {
            path,
            field,
            expected,
            found,
        } => {
            assert_eq!(path, sour);
            assert_eq!(field, "title");
            assert_eq!(expected, "Sour Times");
            assert_eq!(found.as_deref(), Some("Sweet Times"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
