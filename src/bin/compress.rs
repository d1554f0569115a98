// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use imgbatch::application::use_cases::compress_images;
use imgbatch::config::settings::Settings;
use imgbatch::infrastructure::metrics::describe_metrics;
use imgbatch::utils::telemetry;
use tracing::info;

/// 压缩入口
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry("imgbatch-compress");
    describe_metrics();

    let settings = Settings::new()?;
    settings.validate()?;
    info!("Configuration loaded");

    let results = compress_images::run(&settings).await?;
    info!("Compression finished: {}", results.summary());

    Ok(())
}
