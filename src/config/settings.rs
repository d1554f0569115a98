// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::utils::errors::SetupError;
use crate::workers::batch_runner::is_valid_concurrency;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// 应用程序配置设置
///
/// 三个批处理工具共享同一份配置，各自只读取需要的部分
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 批处理执行器配置
    pub runner: RunnerSettings,
    /// CSV数据源配置
    pub source: SourceSettings,
    /// 下载配置
    pub download: DownloadSettings,
    /// 压缩配置
    pub compress: CompressSettings,
    /// 清单配置
    pub manifest: ManifestSettings,
}

/// 批处理执行器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct RunnerSettings {
    /// 并发工作数，范围 1..=`MAX_CONCURRENCY`
    pub concurrency: usize,
    /// 每完成多少项输出一次进度日志
    pub progress_stride: usize,
}

/// CSV数据源配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SourceSettings {
    /// 输入CSV路径
    pub csv_path: PathBuf,
    /// 表头之后读取的数据行数
    pub row_limit: usize,
    /// 数据行不足时是否视为致命错误
    pub require_full_prefix: bool,
}

/// 下载配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadSettings {
    /// 原图保存目录
    pub images_dir: PathBuf,
    /// 保存文件的扩展名
    pub extension: String,
    /// 单次请求超时时间（秒），未设置时不超时
    pub timeout_secs: Option<u64>,
}

impl DownloadSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// 压缩配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CompressSettings {
    /// 源图片目录
    pub input_dir: PathBuf,
    /// 压缩结果目录
    pub output_dir: PathBuf,
    /// 目标像素尺寸，当前不参与处理
    pub target_size: u32,
    /// 编码质量 (0-100)
    pub quality: u8,
}

/// 清单配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestSettings {
    /// 用于判定图片是否存在的目录
    pub present_dir: PathBuf,
    /// 由id推导文件名时使用的扩展名
    pub extension: String,
    /// 清单输出路径
    pub output_path: PathBuf,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和
    /// `IMGBATCH__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::defaults_builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("IMGBATCH").separator("__"));

        builder.build()?.try_deserialize()
    }

    /// 仅包含默认值的配置构建器
    pub fn defaults_builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            // Runner
            .set_default("runner.concurrency", 10)?
            .set_default("runner.progress_stride", 100)?
            // Source CSV
            .set_default("source.csv_path", "edited.csv")?
            .set_default("source.row_limit", 2000)?
            .set_default("source.require_full_prefix", true)?
            // Download
            .set_default("download.images_dir", "images")?
            .set_default("download.extension", "jpeg")?
            // Compress
            .set_default("compress.input_dir", "images")?
            .set_default("compress.output_dir", "compressed")?
            .set_default("compress.target_size", 60)?
            .set_default("compress.quality", 20)?
            // Manifest
            .set_default("manifest.present_dir", "compressed")?
            .set_default("manifest.extension", "jpeg")?
            .set_default("manifest.output_path", "data.json")
    }

    /// 校验取值范围
    pub fn validate(&self) -> Result<(), SetupError> {
        if !is_valid_concurrency(self.runner.concurrency) {
            return Err(SetupError::InvalidConcurrency);
        }
        if self.compress.quality > 100 {
            return Err(SetupError::InvalidSetting(format!(
                "compress.quality must be within 0-100, got {}",
                self.compress.quality
            )));
        }
        if self.download.extension.is_empty() || self.manifest.extension.is_empty() {
            return Err(SetupError::InvalidSetting(
                "file extension must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
