// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：查询参数、岗位详情与查询结果
/// - 服务（services）：批量查询与结果汇总
pub mod models;
pub mod services;
