// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含三个批处理用例：下载、压缩和清单生成
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心数据模型：工作项、处理结果和清单记录
pub mod domain;

/// 引擎模块
///
/// 实现图片抓取引擎
pub mod engines;

/// 基础设施模块
///
/// 提供外部协作者的薄封装，如CSV读取、图像编解码、本地存储等
pub mod infrastructure;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;

/// 工作器模块
///
/// 实现有界并发的批处理执行器
pub mod workers;
