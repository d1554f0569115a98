// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::outcome::Processed;
use crate::utils::errors::OperationError;
use async_trait::async_trait;

/// 单项操作trait
///
/// 批处理执行器对每个工作项调用一次 `execute`，不同工作项可能并发执行。
/// 实现中对共享状态的修改必须自行保证并发安全。
#[async_trait]
pub trait Operation<T: Send + Sync>: Send + Sync {
    /// 处理单个工作项
    async fn execute(&self, item: &T) -> Result<Processed, OperationError>;

    /// 日志中标识工作项的稳定键
    fn key(&self, item: &T) -> String;

    /// 获取操作名称
    fn name(&self) -> &'static str;
}
