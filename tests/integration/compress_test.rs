// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{settings_in, write_jpeg};
use imgbatch::application::use_cases::compress_images;
use imgbatch::domain::models::outcome::Outcome;
use imgbatch::utils::errors::SetupError;

#[tokio::test]
async fn test_compress_mirrors_file_names_and_isolates_broken_files() {
    let dir = tempfile::tempdir().unwrap();
    let images = dir.path().join("images");
    std::fs::create_dir(&images).unwrap();
    write_jpeg(&images.join("1.jpeg"), 120, 80);
    std::fs::write(images.join("2.jpeg"), b"truncated garbage").unwrap();
    write_jpeg(&images.join("3.jpeg"), 40, 40);
    std::fs::write(images.join("4.jpeg.part"), b"unfinished").unwrap();

    let settings = settings_in(dir.path(), &[]);
    let results = compress_images::run(&settings).await.unwrap();

    // Items are the sorted file names of the input directory, without `.part` files.
    assert_eq!(results.len(), 3);
    assert_eq!(results.get(0), Some(&Outcome::Success));
    assert!(results.get(1).unwrap().is_failed());
    assert_eq!(results.get(2), Some(&Outcome::Success));

    let compressed = dir.path().join("compressed");
    let first = image::open(compressed.join("1.jpeg")).unwrap();
    assert_eq!((first.width(), first.height()), (120, 80));
    assert!(compressed.join("3.jpeg").exists());
    assert!(!compressed.join("2.jpeg").exists());
    assert!(!compressed.join("4.jpeg.part").exists());
}

#[tokio::test]
async fn test_compress_on_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("images")).unwrap();

    let settings = settings_in(dir.path(), &[]);
    let results = compress_images::run(&settings).await.unwrap();

    assert!(results.is_empty());
    assert!(dir.path().join("compressed").is_dir());
}

#[tokio::test]
async fn test_missing_input_directory_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_in(dir.path(), &[]);

    let result = compress_images::run(&settings).await;
    assert!(matches!(result, Err(SetupError::MissingDirectory(_))));
}
