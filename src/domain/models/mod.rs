// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 清单记录与清单文件结构
pub mod manifest;
/// 单项处理结果与结果集
pub mod outcome;
/// CSV数据行
pub mod source_row;
