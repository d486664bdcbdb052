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

use crate::domain::models::job::{JobDetail, QueryParam};
use async_trait::async_trait;
use thiserror::Error;

/// 单个职位代码的查询错误
///
/// 所有错误只影响对应的职位代码，不会中断整个批次。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// 请求构造失败、网络错误或超时
    #[error("网络请求失败: {0}")]
    Transport(String),
    /// HTTP 状态码不是 200
    #[error("服务器返回异常状态码: {0}")]
    Server(u16),
    /// 响应体不是预期的 JSON 结构
    #[error("响应解析失败: {0}")]
    Decode(String),
    /// 响应片段中没有任何带标签的单元格
    #[error("无效html: 响应中没有岗位信息")]
    Malformed,
    /// 查询任务异常退出
    #[error("查询任务中断: {0}")]
    Aborted(String),
}

impl FetchError {
    /// 错误分类名称，用于日志
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "TransportError",
            FetchError::Server(_) => "ServerError",
            FetchError::Decode(_) => "DecodeError",
            FetchError::Malformed => "MalformedResponse",
            FetchError::Aborted(_) => "TaskAborted",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Transport(format!("请求超时 ({})", e))
        } else {
            FetchError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

/// 岗位查询特质
///
/// 一次调用对应一个职位代码的一次网络往返，不做重试。
#[async_trait]
pub trait JobFetcher: Send + Sync {
    /// 查询并解析单个岗位
    async fn fetch(&self, param: &QueryParam) -> Result<JobDetail, FetchError>;

    /// 查询器名称
    fn name(&self) -> &'static str;
}
