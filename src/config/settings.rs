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

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use validator::Validate;

/// 默认查询接口
pub const DEFAULT_ENDPOINT: &str = "https://sn.huatu.com/zt/2024skbmrscx/app/executor.php";
/// 默认招考年份
pub const DEFAULT_YEAR: &str = "202401";
/// 默认 User-Agent
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36";
/// 默认 Origin
pub const DEFAULT_ORIGIN: &str = "https://sn.huatu.com";
/// 默认 Referer
pub const DEFAULT_REFERER: &str = "https://sn.huatu.com/zt/2024skbmrscx/";
/// 单次请求超时时间（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// 同时进行中的请求数上限
pub const DEFAULT_CONCURRENCY: usize = 5;

/// 应用程序配置设置
///
/// 包含查询接口、HTTP 请求头和批量并发控制等配置项
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    /// 查询配置
    #[validate(nested)]
    pub query: QuerySettings,
    /// HTTP配置
    #[validate(nested)]
    pub http: HttpSettings,
    /// 批量查询配置
    #[validate(nested)]
    pub batch: BatchSettings,
}

/// 查询配置设置
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuerySettings {
    /// 查询接口URL
    #[validate(url)]
    pub endpoint: String,
    /// 招考年份
    #[validate(length(min = 1))]
    pub year: String,
    /// 用人单位过滤条件，为空表示不过滤
    pub department: String,
}

/// HTTP配置设置
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HttpSettings {
    pub user_agent: String,
    #[validate(url)]
    pub origin: String,
    #[validate(url)]
    pub referer: String,
    /// 单次请求超时时间（秒）
    #[validate(range(min = 1, max = 300))]
    pub timeout_secs: u64,
}

impl HttpSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 批量查询配置设置
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BatchSettings {
    /// 并发请求上限
    #[validate(range(min = 1, max = 64))]
    pub concurrency: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            query: QuerySettings {
                endpoint: DEFAULT_ENDPOINT.to_string(),
                year: DEFAULT_YEAR.to_string(),
                department: String::new(),
            },
            http: HttpSettings {
                user_agent: DEFAULT_USER_AGENT.to_string(),
                origin: DEFAULT_ORIGIN.to_string(),
                referer: DEFAULT_REFERER.to_string(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
            batch: BatchSettings {
                concurrency: DEFAULT_CONCURRENCY,
            },
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载内置默认值、`config/default`、`config/{SXSK_ENVIRONMENT}`
    /// 以及 `SXSK__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("SXSK_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SXSK").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// 从指定配置文件加载，文件中未出现的字段使用默认值
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        Self::builder()?
            .add_source(File::from(path).required(true))
            .add_source(Environment::with_prefix("SXSK").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// 校验配置取值
    pub fn check(&self) -> Result<(), ConfigError> {
        self.validate()
            .map_err(|e| ConfigError::Message(format!("Invalid configuration: {}", e)))
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("query.endpoint", DEFAULT_ENDPOINT)?
            .set_default("query.year", DEFAULT_YEAR)?
            .set_default("query.department", "")?
            .set_default("http.user_agent", DEFAULT_USER_AGENT)?
            .set_default("http.origin", DEFAULT_ORIGIN)?
            .set_default("http.referer", DEFAULT_REFERER)?
            .set_default("http.timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .set_default("batch.concurrency", DEFAULT_CONCURRENCY as u64)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
