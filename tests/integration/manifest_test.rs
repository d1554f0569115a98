// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{settings_in, write_csv};
use imgbatch::application::use_cases::build_manifest;
use imgbatch::domain::models::manifest::{Manifest, ManifestRecord};
use imgbatch::domain::models::outcome::Outcome;
use imgbatch::infrastructure::manifest_writer;
use imgbatch::utils::errors::SetupError;

#[tokio::test]
async fn test_manifest_contains_exactly_present_rows() {
    let dir = tempfile::tempdir().unwrap();
    let compressed = dir.path().join("compressed");
    std::fs::create_dir(&compressed).unwrap();
    std::fs::write(compressed.join("1.jpeg"), b"x").unwrap();
    std::fs::write(compressed.join("3.jpeg"), b"x").unwrap();
    std::fs::write(compressed.join("unrelated.png"), b"x").unwrap();

    write_csv(
        dir.path(),
        &[
            ("1", "http://h/1.jpg", "1.25", "a red \"fox\", running"),
            ("2", "http://h/2.jpg", "0.5", "missing image"),
            ("3", "http://h/3.jpg", "2", "third"),
        ],
    );
    let settings = settings_in(dir.path(), &[("source.row_limit", "3")]);

    let (results, manifest) = build_manifest::run(&settings).await.unwrap();

    assert_eq!(
        results.as_slice(),
        &[Outcome::Success, Outcome::Skipped, Outcome::Success]
    );

    let mut ids: Vec<&str> = manifest.data.iter().map(|r| r.id.as_str()).collect();
    ids.sort();
    assert_eq!(ids, vec!["1", "3"]);

    let written = manifest_writer::read_manifest(&dir.path().join("data.json"))
        .await
        .unwrap();
    assert_eq!(written, manifest);
    let first = written.data.iter().find(|r| r.id == "1").unwrap();
    assert_eq!(
        first,
        &ManifestRecord {
            id: "1".to_string(),
            url: "http://h/1.jpg".to_string(),
            description: "a red \"fox\", running".to_string(),
            ratio: "1.25".to_string(),
        }
    );
}

#[tokio::test]
async fn test_manifest_overwrites_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("compressed")).unwrap();
    std::fs::write(dir.path().join("data.json"), b"{\"data\":[{\"id\":\"old\"}]}").unwrap();
    write_csv(dir.path(), &[("1", "http://h/1.jpg", "1", "one")]);
    let settings = settings_in(dir.path(), &[("source.row_limit", "1")]);

    let (results, manifest) = build_manifest::run(&settings).await.unwrap();

    assert_eq!(results.as_slice(), &[Outcome::Skipped]);
    assert!(manifest.is_empty());
    let written = manifest_writer::read_manifest(&dir.path().join("data.json"))
        .await
        .unwrap();
    assert_eq!(written, Manifest::default());
}

#[tokio::test]
async fn test_missing_present_directory_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), &[("1", "http://h/1.jpg", "1", "one")]);
    let settings = settings_in(dir.path(), &[("source.row_limit", "1")]);

    let result = build_manifest::run(&settings).await;
    assert!(matches!(result, Err(SetupError::MissingDirectory(_))));
}
