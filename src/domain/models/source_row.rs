// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::OperationError;

pub const ID_COLUMN: usize = 0;
pub const URL_COLUMN: usize = 1;
pub const RATIO_COLUMN: usize = 5;
pub const DESCRIPTION_COLUMN: usize = 7;

/// CSV数据行
///
/// 列按位置取值：0 = id, 1 = url, 5 = ratio, 7 = description。
/// 各行长度可以不同，缺列在取值时才报错。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    /// 数据行序号，从1开始，不含表头
    position: usize,
    fields: Vec<String>,
}

impl SourceRow {
    pub fn new(position: usize, fields: Vec<String>) -> Self {
        Self { position, fields }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn id(&self) -> Result<&str, OperationError> {
        self.field(ID_COLUMN, "id")
    }

    pub fn url(&self) -> Result<&str, OperationError> {
        self.field(URL_COLUMN, "url")
    }

    pub fn ratio(&self) -> Result<&str, OperationError> {
        self.field(RATIO_COLUMN, "ratio")
    }

    pub fn description(&self) -> Result<&str, OperationError> {
        self.field(DESCRIPTION_COLUMN, "description")
    }

    /// 日志中使用的标识：优先使用id，缺失时使用行号
    pub fn key(&self) -> String {
        match self.fields.get(ID_COLUMN) {
            Some(id) if !id.is_empty() => id.clone(),
            _ => format!("row {}", self.position),
        }
    }

    fn field(&self, index: usize, column: &'static str) -> Result<&str, OperationError> {
        self.fields
            .get(index)
            .map(String::as_str)
            .ok_or(OperationError::MissingColumn { column, index })
    }
}
