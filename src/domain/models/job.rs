// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 查询成功时 `code` 字段的取值
pub const SUCCESS_CODE: i64 = 1;

/// 岗位查询参数
///
/// 一次查询只针对一个职位代码，年份与用人单位在同一批次内保持不变。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    /// 招考年份，例如 `202401`
    pub year: String,
    /// 用人单位过滤条件，可以为空
    pub department: String,
    /// 职位代码
    pub code: String,
}

impl QueryParam {
    pub fn new(
        year: impl Into<String>,
        department: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            year: year.into(),
            department: department.into(),
            code: code.into(),
        }
    }

    /// 按接口要求的顺序生成表单字段
    pub fn to_form(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("act", "check"),
            ("basic", "checkd"),
            ("status", ""),
            ("year", self.year.as_str()),
            ("dwmc", self.department.as_str()),
            ("gwdm", self.code.as_str()),
        ]
    }

    /// 编码为 `application/x-www-form-urlencoded` 请求体
    pub fn encode(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self.to_form())
    }
}

/// 接口原始响应
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryResponse {
    /// 状态码，1 表示成功
    pub code: i64,
    /// 成功时为一段 `<td>` HTML 片段
    #[serde(rename = "str", default)]
    pub html: String,
}

impl QueryResponse {
    pub fn is_ok(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

/// 岗位报名详情
///
/// 由解析器从一次响应中构造，之后不再修改。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobDetail {
    /// 职位代码
    pub code: String,
    /// 地市
    pub city: String,
    /// 用人单位
    pub department: String,
    /// 招考职位
    pub job_name: String,
    /// 招考人数
    pub recruits_number: u32,
    /// 学历要求
    pub educational: String,
    /// 备注
    pub remark: String,
    /// 报名人数
    pub applicants_number: u32,
}

impl JobDetail {
    /// 招考人数与报名人数之比
    ///
    /// 招考人数为 0 时比值恒为 0；招考人数大于 0 但无人报名时返回
    /// `f64::INFINITY`，排序时位于最前。结果不会是 NaN。
    pub fn ratio(&self) -> f64 {
        if self.recruits_number == 0 {
            return 0.0;
        }
        if self.applicants_number == 0 {
            return f64::INFINITY;
        }
        f64::from(self.recruits_number) / f64::from(self.applicants_number)
    }
}

#[cfg(test)]
#[path = "job_test.rs"]
mod tests;
