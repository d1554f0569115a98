// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{describe_counter, describe_histogram, Unit};

/// 处理项计数，标签 `operation` 与 `outcome`
pub const BATCH_ITEMS_TOTAL: &str = "batch_items_total";
/// 单次批处理耗时，标签 `operation`
pub const BATCH_RUN_DURATION_SECONDS: &str = "batch_run_duration_seconds";

/// 注册指标描述
///
/// 未安装 recorder 时指标调用均为空操作
pub fn describe_metrics() {
    describe_counter!(
        BATCH_ITEMS_TOTAL,
        "Total number of batch items processed, by operation and outcome"
    );
    describe_histogram!(
        BATCH_RUN_DURATION_SECONDS,
        Unit::Seconds,
        "Wall-clock duration of a batch run"
    );
}
