// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::outcome::{Outcome, ResultSet};
use crate::infrastructure::metrics::{BATCH_ITEMS_TOTAL, BATCH_RUN_DURATION_SECONDS};
use crate::utils::errors::SetupError;
use crate::workers::operation::Operation;
use crate::workers::progress::{LogProgress, ProgressObserver};
use futures::FutureExt;
use metrics::{counter, histogram};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

/// 并发数上限，受 tokio 信号量许可数限制
pub const MAX_CONCURRENCY: usize = Semaphore::MAX_PERMITS;

/// 并发数是否在 1..=`MAX_CONCURRENCY` 范围内
pub fn is_valid_concurrency(concurrency: usize) -> bool {
    (1..=MAX_CONCURRENCY).contains(&concurrency)
}

/// 批处理执行器
///
/// 以固定数量的并发许可对一组工作项执行同一个操作：
/// - 每个工作项最多处理一次，不重试
/// - 任一工作项失败或 panic 只会记为 `Outcome::Failed`，不影响其他项
/// - 完成顺序不确定，但结果集与输入按位置对齐
/// - `run` 在所有工作项完成后才返回
pub struct BatchRunner {
    concurrency: usize,
    progress: Arc<dyn ProgressObserver>,
}

impl BatchRunner {
    /// 创建执行器
    ///
    /// # 参数
    ///
    /// * `concurrency` - 同时执行的操作数上限，范围 1..=`MAX_CONCURRENCY`
    pub fn new(concurrency: usize) -> Result<Self, SetupError> {
        if !is_valid_concurrency(concurrency) {
            return Err(SetupError::InvalidConcurrency);
        }
        Ok(Self {
            concurrency,
            progress: Arc::new(LogProgress::default()),
        })
    }

    /// 替换进度观察者
    pub fn with_progress(mut self, progress: Arc<dyn ProgressObserver>) -> Self {
        self.progress = progress;
        self
    }

    /// 执行批处理
    ///
    /// # 参数
    ///
    /// * `items` - 工作项，可以为空
    /// * `operation` - 对每个工作项执行的操作
    ///
    /// # 返回值
    ///
    /// 与 `items` 按位置对齐的结果集
    pub async fn run<T, O>(&self, items: Vec<T>, operation: Arc<O>) -> ResultSet
    where
        T: Send + Sync + 'static,
        O: Operation<T> + ?Sized + 'static,
    {
        let total = items.len();
        let name = operation.name();
        let started = Instant::now();
        info!(
            operation = name,
            "Starting batch of {} items with {} workers", total, self.concurrency
        );

        let mut slots: Vec<Option<Outcome>> = Vec::with_capacity(total);
        slots.resize_with(total, || None);

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let completed = Arc::new(AtomicUsize::new(0));
        let mut tasks = JoinSet::new();

        for (index, item) in items.into_iter().enumerate() {
            // A permit is taken before spawning, so at most `concurrency` tasks exist at once.
            let Ok(permit) = semaphore.clone().acquire_owned().await else {
                unreachable!("semaphore is local to this run and never closed");
            };

            let operation = operation.clone();
            let progress = self.progress.clone();
            let completed = completed.clone();

            tasks.spawn(async move {
                let _permit = permit;
                let outcome = execute_one(operation.as_ref(), &item).await;

                counter!(BATCH_ITEMS_TOTAL, "operation" => name, "outcome" => outcome.label())
                    .increment(1);
                let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                progress.report(name, done, total);

                (index, outcome)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, outcome)) => slots[index] = Some(outcome),
                Err(e) => error!(operation = name, "Batch task aborted: {}", e),
            }
        }

        let results = ResultSet::new(
            slots
                .into_iter()
                .map(|slot| {
                    slot.unwrap_or_else(|| Outcome::Failed("task did not complete".to_string()))
                })
                .collect(),
        );

        let elapsed = started.elapsed();
        histogram!(BATCH_RUN_DURATION_SECONDS, "operation" => name).record(elapsed.as_secs_f64());
        info!(
            operation = name,
            elapsed_ms = elapsed.as_millis() as u64,
            "Batch finished: {}",
            results.summary()
        );

        results
    }
}

async fn execute_one<T, O>(operation: &O, item: &T) -> Outcome
where
    T: Send + Sync,
    O: Operation<T> + ?Sized,
{
    match AssertUnwindSafe(operation.execute(item)).catch_unwind().await {
        Ok(Ok(processed)) => processed.into(),
        Ok(Err(e)) => {
            let key = operation.key(item);
            warn!(operation = operation.name(), item = %key, "Failed to process {}: {}", key, e);
            Outcome::Failed(e.to_string())
        }
        Err(panic) => {
            let key = operation.key(item);
            let reason = panic_message(panic.as_ref());
            error!(
                operation = operation.name(),
                item = %key,
                "Operation panicked on {}: {}", key, reason
            );
            Outcome::Failed(format!("panicked: {}", reason))
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
#[path = "batch_runner_test.rs"]
mod tests;
