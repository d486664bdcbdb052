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

use crate::config::settings::DEFAULT_CONCURRENCY;
use crate::domain::models::job::{JobDetail, QueryParam};
use crate::domain::models::outcome::{BatchReport, Outcome};
use crate::engines::traits::{FetchError, JobFetcher};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

/// 批量查询服务
///
/// 为每个职位代码启动一个查询任务，通过信号量限制同时进行的网络请求数，
/// 等待全部任务结束后汇总为 [`BatchReport`]。
pub struct BatchService {
    /// 岗位查询器
    fetcher: Arc<dyn JobFetcher>,
    /// 并发许可
    permits: Arc<Semaphore>,
    /// 并发上限
    concurrency: usize,
    /// 招考年份
    year: String,
    /// 用人单位过滤条件
    department: String,
}

impl BatchService {
    /// 创建新的批量查询服务实例
    ///
    /// # 参数
    ///
    /// * `fetcher` - 岗位查询器
    /// * `concurrency` - 并发请求上限，传入 0 时按 1 处理
    /// * `year` - 招考年份
    /// * `department` - 用人单位过滤条件
    pub fn new(
        fetcher: Arc<dyn JobFetcher>,
        concurrency: usize,
        year: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        let concurrency = concurrency.max(1);
        Self {
            fetcher,
            permits: Arc::new(Semaphore::new(concurrency)),
            concurrency,
            year: year.into(),
            department: department.into(),
        }
    }

    /// 使用默认并发上限创建服务
    pub fn with_default_concurrency(
        fetcher: Arc<dyn JobFetcher>,
        year: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self::new(fetcher, DEFAULT_CONCURRENCY, year, department)
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// 查询全部职位代码
    ///
    /// 重复的代码不去重，每个输入条目对应一个结果。单个代码失败不会影响其他代码。
    #[instrument(skip(self, codes), fields(total = codes.len(), fetcher = self.fetcher.name()))]
    pub async fn run(&self, codes: &[String]) -> BatchReport {
        let start = Instant::now();
        info!(concurrency = self.concurrency, "Batch query started");

        // Each handle stays paired with the code it was spawned for
        let tasks: Vec<(String, JoinHandle<Result<JobDetail, FetchError>>)> = codes
            .iter()
            .map(|code| (code.clone(), self.spawn_fetch(code)))
            .collect();

        let outcomes = join_all(tasks.into_iter().map(|(code, handle)| async move {
            match handle.await {
                Ok(Ok(job)) => Outcome::Success(job),
                Ok(Err(error)) => {
                    warn!(code = %code, kind = error.kind(), "Query failed: {}", error);
                    Outcome::failure(code, error)
                }
                Err(join_error) => {
                    warn!(code = %code, "Query task aborted: {}", join_error);
                    Outcome::failure(code, FetchError::Aborted(join_error.to_string()))
                }
            }
        }))
        .await;

        let report = BatchReport::from_outcomes(outcomes);
        info!(
            succeeded = report.successes.len(),
            failed = report.failures.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Batch query finished"
        );
        report
    }

    /// 启动单个查询任务
    ///
    /// 任务在发起网络请求前获取许可，许可随任务结束（包括出错或 panic）自动释放。
    fn spawn_fetch(&self, code: &str) -> JoinHandle<Result<JobDetail, FetchError>> {
        let fetcher = self.fetcher.clone();
        let permits = self.permits.clone();
        let param = QueryParam::new(self.year.as_str(), self.department.as_str(), code);

        tokio::spawn(async move {
            let _permit = permits
                .acquire_owned()
                .await
                .map_err(|e| FetchError::Aborted(e.to_string()))?;
            fetcher.fetch(&param).await
        })
    }
}

#[cfg(test)]
#[path = "batch_service_test.rs"]
mod tests;
