// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use thiserror::Error;

use crate::config::settings::Settings;
use crate::domain::models::outcome::BatchReport;
use crate::domain::services::batch_service::BatchService;
use crate::engines::reqwest_engine::ReqwestEngine;
use crate::engines::traits::JobFetcher;

// === Section: Errors ===

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryJobsError {
    #[error("未提供职位代码")]
    NoCodes,
    #[error("职位代码不能为空 (第 {0} 项)")]
    EmptyCode(usize),
}

// === Section: Use Case Definition ===

pub struct QueryJobsUseCase {
    batch_service: BatchService,
}

// === Section: Implementation ===

impl QueryJobsUseCase {
    pub fn new(batch_service: BatchService) -> Self {
        Self { batch_service }
    }

    /// 按配置构造真实的HTTP查询器
    pub fn from_settings(settings: &Settings) -> Self {
        let fetcher: Arc<dyn JobFetcher> = Arc::new(ReqwestEngine::new(
            settings.query.endpoint.clone(),
            settings.http.clone(),
        ));
        Self::new(BatchService::new(
            fetcher,
            settings.batch.concurrency,
            settings.query.year.clone(),
            settings.query.department.clone(),
        ))
    }

    pub async fn execute(&self, codes: &[String]) -> Result<BatchReport, QueryJobsError> {
        Self::validate_codes(codes)?;
        Ok(self.batch_service.run(codes).await)
    }

    fn validate_codes(codes: &[String]) -> Result<(), QueryJobsError> {
        if codes.is_empty() {
            return Err(QueryJobsError::NoCodes);
        }
        if let Some(index) = codes.iter().position(|c| c.trim().is_empty()) {
            return Err(QueryJobsError::EmptyCode(index + 1));
        }
        Ok(())
    }
}

/// 拆分逗号分隔的职位代码列表
///
/// 去掉每项两侧空白并丢弃空项，保留重复项与原有顺序。同时接受全角逗号。
pub fn split_codes(raw: &str) -> Vec<String> {
    raw.split([',', '，'])
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}
