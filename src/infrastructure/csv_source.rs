// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::SourceSettings;
use crate::domain::models::source_row::SourceRow;
use crate::utils::errors::SetupError;
use std::io::Read;
use tracing::{info, warn};

/// 从配置指定的CSV文件读取数据行前缀
///
/// 跳过表头，最多读取 `row_limit` 行
pub fn read_rows(settings: &SourceSettings) -> Result<Vec<SourceRow>, SetupError> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(&settings.csv_path)?;

    let rows = collect_prefix(reader, settings.row_limit, settings.require_full_prefix)?;
    info!(
        "Loaded {} rows from {}",
        rows.len(),
        settings.csv_path.display()
    );
    Ok(rows)
}

/// 从任意输入读取数据行前缀，首行视为表头
pub fn read_rows_from_reader<R: Read>(
    input: R,
    row_limit: usize,
    require_full_prefix: bool,
) -> Result<Vec<SourceRow>, SetupError> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);
    collect_prefix(reader, row_limit, require_full_prefix)
}

fn collect_prefix<R: Read>(
    mut reader: csv::Reader<R>,
    row_limit: usize,
    require_full_prefix: bool,
) -> Result<Vec<SourceRow>, SetupError> {
    let mut rows = Vec::with_capacity(row_limit.min(4096));
    for (index, record) in reader.records().take(row_limit).enumerate() {
        let record = record?;
        rows.push(SourceRow::new(
            index + 1,
            record.iter().map(str::to_string).collect(),
        ));
    }

    if rows.len() < row_limit {
        if require_full_prefix {
            return Err(SetupError::InsufficientRows {
                expected: row_limit,
                found: rows.len(),
            });
        }
        warn!(
            "CSV has only {} data rows, fewer than the configured {}",
            rows.len(),
            row_limit
        );
    }

    Ok(rows)
}
