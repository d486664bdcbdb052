// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// 命令行参数
#[derive(Debug, Parser)]
#[command(name = "sxsk", version, about = "岗位报考人数查询")]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "SXSK_CONFIG_FILE", value_name = "PATH", global = true)]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// v1版本的报考人数查询
    ///
    /// 通过 https://sn.huatu.com 提供的接口查询各岗位的报名信息
    #[command(name = "v1", after_help = "示例: sxsk v1 10101001,10101002")]
    V1(V1Args),
}

#[derive(Debug, Args, Clone)]
pub struct V1Args {
    /// 职位代码，多个代码用逗号分隔
    #[arg(value_name = "CODES")]
    pub codes: String,

    /// Override the maximum number of concurrent requests.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub concurrency: Option<usize>,

    /// Override the recruitment year sent with each query.
    #[arg(long)]
    pub year: Option<String>,

    /// Filter by employer name.
    #[arg(long)]
    pub department: Option<String>,
}
