// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod build_manifest;
pub mod compress_images;
pub mod download_images;
