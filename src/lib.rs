// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含批量查询用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含岗位数据模型与批量查询服务
pub mod domain;

/// 引擎模块
///
/// 实现岗位查询与响应解析
pub mod engines;

/// 表示层模块
///
/// 处理命令行参数与结果表格输出
pub mod presentation;

/// 工具模块
///
/// 提供日志初始化等辅助功能
pub mod utils;
