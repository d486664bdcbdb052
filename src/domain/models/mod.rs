// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 岗位（job）：查询参数、接口响应与岗位详情
/// - 结果（outcome）：单个代码的查询结果与批次汇总
pub mod job;
pub mod outcome;
