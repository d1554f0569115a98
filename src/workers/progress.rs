// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing::info;

/// 进度观察者
///
/// 每完成一个工作项调用一次，仅用于观察，不影响结果
pub trait ProgressObserver: Send + Sync {
    fn report(&self, operation: &str, completed: usize, total: usize);
}

/// 按固定步长输出进度日志
#[derive(Debug, Clone)]
pub struct LogProgress {
    stride: usize,
}

impl LogProgress {
    pub fn new(stride: usize) -> Self {
        Self {
            stride: stride.max(1),
        }
    }

    /// 每 `stride` 项以及最后一项输出一次
    fn should_log(&self, completed: usize, total: usize) -> bool {
        completed == total || completed % self.stride == 0
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new(100)
    }
}

impl ProgressObserver for LogProgress {
    fn report(&self, operation: &str, completed: usize, total: usize) {
        if self.should_log(completed, total) {
            let percent = if total == 0 {
                100.0
            } else {
                completed as f64 * 100.0 / total as f64
            };
            info!(operation, "Progress: {}/{} ({:.1}%)", completed, total, percent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logs_on_stride_multiples() {
        let progress = LogProgress::new(3);
        let logged: Vec<usize> = (1..=10).filter(|&n| progress.should_log(n, 10)).collect();
        assert_eq!(logged, vec![3, 6, 9, 10]);
    }

    #[test]
    fn test_final_item_is_always_logged() {
        let progress = LogProgress::new(100);
        assert!(!progress.should_log(7, 8));
        assert!(progress.should_log(8, 8));
    }

    #[test]
    fn test_zero_stride_is_clamped_to_one() {
        let progress = LogProgress::new(0);
        assert!((1..5).all(|n| progress.should_log(n, 5)));
    }

    #[test]
    fn test_empty_batch_reports_without_panicking() {
        let progress = LogProgress::default();
        assert!(progress.should_log(0, 0));
        progress.report("download", 0, 0);
    }
}
