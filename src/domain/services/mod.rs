// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 批量查询服务（batch_service）：限制并发地查询一组职位代码并汇总结果
pub mod batch_service;
