// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 集成测试模块
///
/// 在临时目录中端到端运行三个批处理用例
mod helpers;

mod compress_test;
mod download_test;
mod manifest_test;
