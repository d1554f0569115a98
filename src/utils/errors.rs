// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::EngineError;
use std::path::PathBuf;
use thiserror::Error;

/// 单个工作项的处理错误
///
/// 在操作边界被捕获并转换为 `Outcome::Failed`，不会中断整批运行
#[derive(Error, Debug)]
pub enum OperationError {
    #[error("传输错误: {0}")]
    Transport(#[from] EngineError),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("图像编解码错误: {0}")]
    Image(#[from] image::ImageError),

    #[error("缺少第 {index} 列 ({column})")]
    MissingColumn { column: &'static str, index: usize },

    #[error("无效的标识符: {0}")]
    InvalidId(String),

    #[error("内部错误: {0}")]
    Internal(String),
}

/// 启动阶段错误
///
/// 配置、输入文件或目录有问题时整个运行直接失败
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("配置错误: {0}")]
    Config(#[from] config::ConfigError),

    #[error("无效配置: {0}")]
    InvalidSetting(String),

    #[error("并发数必须在 1 到信号量许可上限之间")]
    InvalidConcurrency,

    #[error("CSV读取错误: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV数据行不足: 需要 {expected} 行, 实际 {found} 行")]
    InsufficientRows { expected: usize, found: usize },

    #[error("目录不存在: {0}")]
    MissingDirectory(PathBuf),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON序列化错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("引擎初始化错误: {0}")]
    Engine(#[from] EngineError),
}
