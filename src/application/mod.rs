// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// 三个批处理工具各自的单项操作与运行入口
pub mod use_cases;
