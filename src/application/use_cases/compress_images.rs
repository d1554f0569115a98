// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::models::outcome::{Processed, ResultSet};
use crate::infrastructure::image_codec;
use crate::infrastructure::storage::{LocalStorage, PARTIAL_SUFFIX};
use crate::utils::errors::{OperationError, SetupError};
use crate::workers::operation::Operation;
use crate::workers::progress::LogProgress;
use crate::workers::BatchRunner;
use async_trait::async_trait;
use std::io;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 图片压缩操作
///
/// 将输入目录中的同名文件重新编码写入输出目录
pub struct CompressOperation {
    input: LocalStorage,
    output: LocalStorage,
    quality: u8,
}

impl CompressOperation {
    pub fn new(input: LocalStorage, output: LocalStorage, quality: u8) -> Self {
        Self {
            input,
            output,
            quality,
        }
    }
}

#[async_trait]
impl Operation<String> for CompressOperation {
    async fn execute(&self, file_name: &String) -> Result<Processed, OperationError> {
        let source = self.input.path(file_name);
        let destination = self.output.path(file_name);
        let quality = self.quality;

        tokio::task::spawn_blocking(move || {
            image_codec::recompress(&source, &destination, quality)
        })
        .await
        .map_err(|e| OperationError::Internal(format!("codec task failed: {}", e)))??;

        Ok(Processed::Success)
    }

    fn key(&self, file_name: &String) -> String {
        file_name.clone()
    }

    fn name(&self) -> &'static str {
        "compress"
    }
}

/// 压缩输入目录中的全部图片
///
/// 输入目录不存在时直接失败，输出目录按需创建
pub async fn run(settings: &Settings) -> Result<ResultSet, SetupError> {
    let config = &settings.compress;
    let runner = BatchRunner::new(settings.runner.concurrency)?
        .with_progress(Arc::new(LogProgress::new(settings.runner.progress_stride)));

    let input = LocalStorage::new(&config.input_dir);
    let files = match input.list_files().await {
        Ok(files) => files,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(SetupError::MissingDirectory(config.input_dir.clone()));
        }
        Err(e) => return Err(e.into()),
    };

    let (files, partial): (Vec<String>, Vec<String>) =
        files.into_iter().partition(|name| !name.ends_with(PARTIAL_SUFFIX));
    if !partial.is_empty() {
        warn!("Ignoring {} unfinished downloads", partial.len());
    }

    let output = LocalStorage::new(&config.output_dir);
    output.ensure_dir().await?;

    // TODO: apply target_size as a bounding-box resize once the expected output dimensions are settled.
    debug!(
        target_size = config.target_size,
        "Target size is not applied; images keep their original dimensions"
    );
    info!(
        "Compressing {} images from {} into {} at quality {}",
        files.len(),
        input.base_path().display(),
        output.base_path().display(),
        config.quality
    );

    let operation = Arc::new(CompressOperation::new(input, output, config.quality));
    Ok(runner.run(files, operation).await)
}
