// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工作器模块
///
/// 提供有界并发的批处理执行功能
/// 包括单项操作接口、执行器和进度报告
pub mod batch_runner;
pub mod operation;
pub mod progress;

pub use batch_runner::BatchRunner;
pub use operation::Operation;
