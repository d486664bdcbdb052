// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Context;
use clap::Parser;
use sxsk::application::usecases::query_jobs::{split_codes, QueryJobsUseCase};
use sxsk::config::settings::Settings;
use sxsk::presentation::cli::{CliArgs, Command};
use sxsk::presentation::report;
use sxsk::utils::telemetry;
use tracing::info;

/// 主函数
///
/// 解析命令行、加载配置、执行批量查询并输出结果表格
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 1. Initialize logging
    telemetry::init_telemetry();

    // 2. Load configuration
    let mut settings = match &args.config_file {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Settings::new().context("Failed to load configuration")?,
    };

    match args.command {
        Command::V1(v1) => {
            if let Some(concurrency) = v1.concurrency {
                settings.batch.concurrency = concurrency;
            }
            if let Some(year) = v1.year {
                settings.query.year = year;
            }
            if let Some(department) = v1.department {
                settings.query.department = department;
            }
            settings.check()?;
            info!(endpoint = %settings.query.endpoint, "Configuration loaded");

            // 3. Run the batch and print both tables
            let codes = split_codes(&v1.codes);
            let use_case = QueryJobsUseCase::from_settings(&settings);
            let batch = use_case.execute(&codes).await?;

            let rendered = report::render_report(&batch);
            if !rendered.is_empty() {
                println!("{}", rendered);
            }
        }
    }

    Ok(())
}
