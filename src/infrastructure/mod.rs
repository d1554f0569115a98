// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施模块
///
/// 对CSV、图像编解码、本地文件系统和指标等外部协作者的薄封装
pub mod csv_source;
pub mod image_codec;
pub mod manifest_writer;
pub mod metrics;
pub mod storage;
