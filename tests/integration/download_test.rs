// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{settings_in, write_csv};
use imgbatch::application::use_cases::download_images;
use imgbatch::domain::models::outcome::Outcome;
use imgbatch::utils::errors::SetupError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn image_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"first-image".to_vec()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/2.jpg"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/3.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"third-image".to_vec()))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_download_is_idempotent_and_isolates_failures() {
    let server = image_server().await;
    let dir = tempfile::tempdir().unwrap();
    let urls: Vec<String> = ["1.jpg", "2.jpg", "3.jpg"]
        .iter()
        .map(|name| format!("{}/{}", server.uri(), name))
        .collect();
    write_csv(
        dir.path(),
        &[
            ("1", urls[0].as_str(), "1.0", "one"),
            ("2", urls[1].as_str(), "1.0", "two"),
            ("3", urls[2].as_str(), "1.0", "three"),
        ],
    );
    let settings = settings_in(dir.path(), &[("source.row_limit", "3")]);

    let first = download_images::run(&settings).await.unwrap();
    assert_eq!(first.len(), 3);
    assert_eq!(first.get(0), Some(&Outcome::Success));
    assert!(first.get(1).unwrap().is_failed());
    assert!(first.get(1).unwrap().reason().unwrap().contains("500"));
    assert_eq!(first.get(2), Some(&Outcome::Success));

    let images = dir.path().join("images");
    assert_eq!(std::fs::read(images.join("1.jpeg")).unwrap(), b"first-image");
    assert_eq!(std::fs::read(images.join("3.jpeg")).unwrap(), b"third-image");
    assert!(!images.join("2.jpeg").exists());
    assert!(!images.join("2.jpeg.part").exists());

    let second = download_images::run(&settings).await.unwrap();
    assert_eq!(second.get(0), Some(&Outcome::Skipped));
    assert!(second.get(1).unwrap().is_failed());
    assert_eq!(second.get(2), Some(&Outcome::Skipped));
    assert_eq!(std::fs::read(images.join("1.jpeg")).unwrap(), b"first-image");
}

#[tokio::test]
async fn test_short_csv_is_fatal_by_default() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), &[("1", "http://127.0.0.1:9/1.jpg", "1", "one")]);
    let settings = settings_in(dir.path(), &[]);

    let result = download_images::run(&settings).await;
    assert!(matches!(
        result,
        Err(SetupError::InsufficientRows {
            expected: 2000,
            found: 1
        })
    ));
}

#[tokio::test]
async fn test_short_csv_can_be_tolerated() {
    let server = image_server().await;
    let dir = tempfile::tempdir().unwrap();
    let url = format!("{}/1.jpg", server.uri());
    write_csv(dir.path(), &[("1", url.as_str(), "1.0", "one")]);
    let settings = settings_in(dir.path(), &[("source.require_full_prefix", "false")]);

    let results = download_images::run(&settings).await.unwrap();
    assert_eq!(results.as_slice(), &[Outcome::Success]);
}

#[tokio::test]
async fn test_missing_csv_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_in(dir.path(), &[]);

    let result = download_images::run(&settings).await;
    assert!(matches!(result, Err(SetupError::Csv(_))));
}
