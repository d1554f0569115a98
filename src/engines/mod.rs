// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 引擎模块
///
/// 定义图片抓取接口及基于reqwest的实现
pub mod reqwest_engine;
pub mod traits;
