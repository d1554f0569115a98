// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::models::manifest::{Manifest, ManifestRecord};
use crate::domain::models::outcome::{Processed, ResultSet};
use crate::domain::models::source_row::SourceRow;
use crate::infrastructure::storage::LocalStorage;
use crate::infrastructure::{csv_source, manifest_writer};
use crate::utils::errors::{OperationError, SetupError};
use crate::workers::operation::Operation;
use crate::workers::progress::LogProgress;
use crate::workers::BatchRunner;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::io;
use std::sync::Arc;
use tracing::info;

/// 清单过滤追加操作
///
/// 行对应的 `<id>.<extension>` 在现有文件集合中时，把记录追加到共享累加器。
/// 累加器由互斥锁保护，按行号排序后输出。
pub struct FilterAppendOperation {
    present: HashSet<String>,
    extension: String,
    records: Mutex<Vec<(usize, ManifestRecord)>>,
}

impl FilterAppendOperation {
    pub fn new(present: HashSet<String>, extension: String) -> Self {
        Self {
            present,
            extension,
            records: Mutex::new(Vec::new()),
        }
    }

    /// 取出已收集的记录，按输入行顺序排列
    pub fn take_manifest(&self) -> Manifest {
        let mut records = std::mem::take(&mut *self.records.lock());
        records.sort_by_key(|(position, _)| *position);
        Manifest::new(records.into_iter().map(|(_, record)| record).collect())
    }
}

#[async_trait]
impl Operation<SourceRow> for FilterAppendOperation {
    async fn execute(&self, row: &SourceRow) -> Result<Processed, OperationError> {
        let file_name = format!("{}.{}", row.id()?, self.extension);
        if !self.present.contains(&file_name) {
            return Ok(Processed::Skipped);
        }

        let record = ManifestRecord::try_from(row)?;
        self.records.lock().push((row.position(), record));
        Ok(Processed::Success)
    }

    fn key(&self, row: &SourceRow) -> String {
        row.key()
    }

    fn name(&self) -> &'static str {
        "manifest"
    }
}

/// 生成清单
///
/// 返回逐行结果与写出的清单
pub async fn run(settings: &Settings) -> Result<(ResultSet, Manifest), SetupError> {
    let config = &settings.manifest;
    let runner = BatchRunner::new(settings.runner.concurrency)?
        .with_progress(Arc::new(LogProgress::new(settings.runner.progress_stride)));

    let present = match LocalStorage::new(&config.present_dir).file_set().await {
        Ok(present) => present,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(SetupError::MissingDirectory(config.present_dir.clone()));
        }
        Err(e) => return Err(e.into()),
    };
    let rows = csv_source::read_rows(&settings.source)?;
    info!(
        "Filtering {} rows against {} files in {}",
        rows.len(),
        present.len(),
        config.present_dir.display()
    );

    let operation = Arc::new(FilterAppendOperation::new(present, config.extension.clone()));
    let results = runner.run(rows, operation.clone()).await;

    let manifest = operation.take_manifest();
    manifest_writer::write_manifest(&config.output_path, &manifest).await?;
    Ok((results, manifest))
}
