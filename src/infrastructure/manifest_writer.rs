// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::manifest::Manifest;
use crate::utils::errors::SetupError;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// 写出清单文件，覆盖已有文件
pub async fn write_manifest(path: &Path, manifest: &Manifest) -> Result<(), SetupError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let body = serde_json::to_vec(manifest)?;
    fs::write(path, body).await?;

    info!(
        "Wrote manifest with {} records to {}",
        manifest.len(),
        path.display()
    );
    Ok(())
}

/// 读取清单文件
pub async fn read_manifest(path: &Path) -> Result<Manifest, SetupError> {
    let body = fs::read(path).await?;
    Ok(serde_json::from_slice(&body)?)
}
