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

use crate::config::settings::{HttpSettings, DEFAULT_TIMEOUT_SECS};
use crate::domain::models::job::{JobDetail, QueryParam, QueryResponse};
use crate::engines::parser;
use crate::engines::traits::{FetchError, JobFetcher};
use async_trait::async_trait;
use once_cell::sync::OnceCell;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT};
use reqwest::StatusCode;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// 进程内共享的HTTP客户端
static HTTP_CLIENT: OnceCell<reqwest::Client> = OnceCell::new();

/// 获取共享HTTP客户端，首次调用时构造
///
/// 多个任务并发首次调用时只会有一个完成初始化，其余等待其结果。
pub fn shared_client() -> Result<&'static reqwest::Client, FetchError> {
    HTTP_CLIENT
        .get_or_try_init(|| {
            reqwest::Client::builder()
                .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
                .build()
        })
        .map_err(FetchError::from)
}

/// 岗位查询引擎
///
/// 基于reqwest向报名统计接口发送表单POST请求
pub struct ReqwestEngine {
    endpoint: String,
    http: HttpSettings,
}

impl ReqwestEngine {
    pub fn new(endpoint: impl Into<String>, http: HttpSettings) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    /// 构造固定请求头，取值不合法时视为请求构造失败
    fn headers(&self) -> Result<HeaderMap, FetchError> {
        let value = |v: &str| {
            HeaderValue::from_str(v)
                .map_err(|e| FetchError::Transport(format!("Invalid header value: {}", e)))
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, value(&self.http.user_agent)?);
        headers.insert(ORIGIN, value(&self.http.origin)?);
        headers.insert(REFERER, value(&self.http.referer)?);
        Ok(headers)
    }
}

#[async_trait]
impl JobFetcher for ReqwestEngine {
    /// 查询单个职位代码
    ///
    /// # 参数
    ///
    /// * `param` - 查询参数
    ///
    /// # 返回值
    ///
    /// * `Ok(JobDetail)` - 解析后的岗位详情
    /// * `Err(FetchError)` - 网络、状态码、解码或解析错误
    async fn fetch(&self, param: &QueryParam) -> Result<JobDetail, FetchError> {
        let client = shared_client()?;
        let body = param
            .encode()
            .map_err(|e| FetchError::Transport(format!("Invalid form body: {}", e)))?;

        let start = Instant::now();
        let response = client
            .post(&self.endpoint)
            .headers(self.headers()?)
            .timeout(self.http.timeout())
            .body(body)
            .send()
            .await?;

        let status = response.status();
        debug!(
            code = %param.code,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Query response received"
        );
        if status != StatusCode::OK {
            return Err(FetchError::Server(status.as_u16()));
        }

        let text = response.text().await?;
        let reply: QueryResponse = serde_json::from_str(&text)?;
        if !reply.is_ok() {
            warn!(code = %param.code, reply_code = reply.code, "Query reply not marked as success");
        }

        let mut job = parser::parse_job_detail(&reply.html)?;
        if job.code.is_empty() {
            job.code = param.code.clone();
        }
        Ok(job)
    }

    /// 获取引擎名称
    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
