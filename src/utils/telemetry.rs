// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志格式环境变量，取值 `json` 时输出结构化日志
pub const LOG_FORMAT_ENV: &str = "IMGBATCH_LOG_FORMAT";

/// 初始化日志订阅器
///
/// 过滤规则取自 `RUST_LOG`，缺省为 `info,imgbatch=debug`
pub fn init_telemetry(binary: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,imgbatch=debug".into());
    let json = std::env::var(LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }

    tracing::debug!(binary, "Telemetry initialized");
}
