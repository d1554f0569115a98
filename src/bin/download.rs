// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use imgbatch::application::use_cases::download_images;
use imgbatch::config::settings::Settings;
use imgbatch::infrastructure::metrics::describe_metrics;
use imgbatch::utils::telemetry;
use tracing::info;

/// 下载入口
///
/// 读取CSV前缀并下载每行引用的图片，已存在的文件跳过
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry("imgbatch-download");
    describe_metrics();

    let settings = Settings::new()?;
    settings.validate()?;
    info!("Configuration loaded");

    let results = download_images::run(&settings).await?;
    info!("Download finished: {}", results.summary());

    Ok(())
}
