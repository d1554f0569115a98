// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;
use std::fmt;

/// 单个工作项的处理结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum Outcome {
    /// 处理成功
    Success,
    /// 结果已存在，未处理
    Skipped,
    /// 处理失败，附带原因
    Failed(String),
}

impl Outcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    /// 失败原因，非失败结果返回 None
    pub fn reason(&self) -> Option<&str> {
        match self {
            Outcome::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// 用于指标标签的名称
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Skipped => "skipped",
            Outcome::Failed(_) => "failed",
        }
    }
}

/// 操作正常结束时的结果
///
/// 失败通过 `Err` 返回，由执行器转换为 `Outcome::Failed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Processed {
    Success,
    Skipped,
}

impl From<Processed> for Outcome {
    fn from(processed: Processed) -> Self {
        match processed {
            Processed::Success => Outcome::Success,
            Processed::Skipped => Outcome::Skipped,
        }
    }
}

/// 与输入按位置对齐的结果集
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSet {
    outcomes: Vec<Outcome>,
}

impl ResultSet {
    pub fn new(outcomes: Vec<Outcome>) -> Self {
        Self { outcomes }
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Outcome> {
        self.outcomes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Outcome> {
        self.outcomes.iter()
    }

    pub fn as_slice(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// 失败项的位置与原因
    pub fn failures(&self) -> impl Iterator<Item = (usize, &str)> {
        self.outcomes
            .iter()
            .enumerate()
            .filter_map(|(index, outcome)| outcome.reason().map(|reason| (index, reason)))
    }

    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary {
            total: self.outcomes.len(),
            ..RunSummary::default()
        };
        for outcome in &self.outcomes {
            match outcome {
                Outcome::Success => summary.succeeded += 1,
                Outcome::Skipped => summary.skipped += 1,
                Outcome::Failed(_) => summary.failed += 1,
            }
        }
        summary
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Outcome;
    type IntoIter = std::slice::Iter<'a, Outcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}

/// 运行统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} total, {} succeeded, {} skipped, {} failed",
            self.total, self.succeeded, self.skipped, self.failed
        )
    }
}
