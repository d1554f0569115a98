// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use imgbatch::application::use_cases::build_manifest;
use imgbatch::config::settings::Settings;
use imgbatch::infrastructure::metrics::describe_metrics;
use imgbatch::utils::telemetry;
use tracing::info;

/// 清单入口
///
/// 只保留压缩目录中存在对应图片的行，写出 `data.json`
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry("imgbatch-manifest");
    describe_metrics();

    let settings = Settings::new()?;
    settings.validate()?;
    info!("Configuration loaded");

    let (results, manifest) = build_manifest::run(&settings).await?;
    info!(
        "Manifest finished: {} records written to {} ({})",
        manifest.len(),
        settings.manifest.output_path.display(),
        results.summary()
    );

    Ok(())
}
