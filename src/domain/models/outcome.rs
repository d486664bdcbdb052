// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job::JobDetail;
use crate::engines::traits::FetchError;

/// 查询失败的职位代码及其错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedCode {
    /// 发起查询时使用的职位代码
    pub code: String,
    pub error: FetchError,
}

/// 单个职位代码的查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(JobDetail),
    Failure(FailedCode),
}

impl Outcome {
    pub fn failure(code: impl Into<String>, error: FetchError) -> Self {
        Outcome::Failure(FailedCode {
            code: code.into(),
            error,
        })
    }
}

/// 一次批量查询的汇总结果
///
/// 成功与失败两个集合互不相交，数量之和等于输入的职位代码数。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub successes: Vec<JobDetail>,
    pub failures: Vec<FailedCode>,
}

impl BatchReport {
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = Outcome>) -> Self {
        let mut report = Self::default();
        for outcome in outcomes {
            match outcome {
                Outcome::Success(job) => report.successes.push(job),
                Outcome::Failure(failed) => report.failures.push(failed),
            }
        }
        report
    }

    /// 结果总数
    pub fn total(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
