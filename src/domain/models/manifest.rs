// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::source_row::SourceRow;
use crate::utils::errors::OperationError;
use serde::{Deserialize, Serialize};

/// 清单记录
///
/// 字段从CSV行原样复制
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRecord {
    pub id: String,
    pub url: String,
    pub description: String,
    pub ratio: String,
}

impl TryFrom<&SourceRow> for ManifestRecord {
    type Error = OperationError;

    fn try_from(row: &SourceRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id()?.to_string(),
            url: row.url()?.to_string(),
            description: row.description()?.to_string(),
            ratio: row.ratio()?.to_string(),
        })
    }
}

/// 清单文件 `{ "data": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub data: Vec<ManifestRecord>,
}

impl Manifest {
    pub fn new(data: Vec<ManifestRecord>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
