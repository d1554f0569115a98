// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::models::outcome::{Processed, ResultSet};
use crate::domain::models::source_row::SourceRow;
use crate::engines::reqwest_engine::ReqwestFetcher;
use crate::engines::traits::ImageFetcher;
use crate::infrastructure::csv_source;
use crate::infrastructure::storage::LocalStorage;
use crate::utils::errors::{OperationError, SetupError};
use crate::workers::operation::Operation;
use crate::workers::progress::LogProgress;
use crate::workers::BatchRunner;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// 图片下载操作
///
/// 目标文件 `<images_dir>/<id>.<extension>` 已存在时跳过，
/// 因此重复运行可以从中断处继续
pub struct DownloadOperation {
    fetcher: Arc<dyn ImageFetcher>,
    storage: LocalStorage,
    extension: String,
}

impl DownloadOperation {
    pub fn new(fetcher: Arc<dyn ImageFetcher>, storage: LocalStorage, extension: String) -> Self {
        Self {
            fetcher,
            storage,
            extension,
        }
    }

    pub fn file_name(&self, id: &str) -> String {
        format!("{}.{}", id, self.extension)
    }
}

#[async_trait]
impl Operation<SourceRow> for DownloadOperation {
    async fn execute(&self, row: &SourceRow) -> Result<Processed, OperationError> {
        let id = validate_id(row.id()?)?;
        let url = row.url()?;
        let file_name = self.file_name(id);

        if self.storage.exists(&file_name).await? {
            debug!("{} already downloaded, skipping", file_name);
            return Ok(Processed::Skipped);
        }

        let body = self.fetcher.fetch(url).await?;
        self.storage.save(&file_name, &body).await?;
        debug!("Downloaded {} ({} bytes) from {}", file_name, body.len(), url);
        Ok(Processed::Success)
    }

    fn key(&self, row: &SourceRow) -> String {
        match row.url() {
            Ok(url) => format!("{} ({})", row.key(), url),
            Err(_) => row.key(),
        }
    }

    fn name(&self) -> &'static str {
        "download"
    }
}

/// id 会成为文件名，不允许为空或包含路径成分
pub(crate) fn validate_id(id: &str) -> Result<&str, OperationError> {
    if id.trim().is_empty() || id == "." || id == ".." || id.contains(['/', '\\']) {
        return Err(OperationError::InvalidId(id.to_string()));
    }
    Ok(id)
}

/// 下载CSV前缀中每一行引用的图片
pub async fn run(settings: &Settings) -> Result<ResultSet, SetupError> {
    let runner = BatchRunner::new(settings.runner.concurrency)?
        .with_progress(Arc::new(LogProgress::new(settings.runner.progress_stride)));

    let rows = csv_source::read_rows(&settings.source)?;

    let storage = LocalStorage::new(&settings.download.images_dir);
    storage.ensure_dir().await?;

    let fetcher = Arc::new(ReqwestFetcher::new(settings.download.timeout())?);
    info!(
        engine = fetcher.name(),
        "Downloading {} images into {}",
        rows.len(),
        storage.base_path().display()
    );

    let operation = Arc::new(DownloadOperation::new(
        fetcher,
        storage,
        settings.download.extension.clone(),
    ));
    Ok(runner.run(rows, operation).await)
}
