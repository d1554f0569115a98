// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashSet;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 未完成写入的文件后缀
pub const PARTIAL_SUFFIX: &str = ".part";

/// 本地目录存储
///
/// 以文件名为键读写单个目录中的文件
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// 确保目录存在
    pub async fn ensure_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.base_path).await
    }

    pub async fn exists(&self, name: &str) -> io::Result<bool> {
        fs::try_exists(self.path(name)).await
    }

    /// 保存文件
    ///
    /// 每次写入使用独立的临时文件 `.<name>.*.part`，完成后原子替换目标文件，
    /// 同名并发写入互不干扰，中断的写入不会留下同名文件
    pub async fn save(&self, name: &str, data: &[u8]) -> io::Result<()> {
        let base_path = self.base_path.clone();
        let final_path = self.path(name);
        let prefix = format!(".{}.", name);
        let data = data.to_vec();

        tokio::task::spawn_blocking(move || -> io::Result<()> {
            let mut file = tempfile::Builder::new()
                .prefix(&prefix)
                .suffix(PARTIAL_SUFFIX)
                .tempfile_in(&base_path)?;
            file.write_all(&data)?;
            file.flush()?;
            file.persist(&final_path).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(io::Error::other)?
    }

    /// 列出目录中的普通文件名（已排序）
    pub async fn list_files(&self) -> io::Result<Vec<String>> {
        let mut entries = fs::read_dir(&self.base_path).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// 目录中现有文件名的集合
    pub async fn file_set(&self) -> io::Result<HashSet<String>> {
        Ok(self.list_files().await?.into_iter().collect())
    }
}
