// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job::JobDetail;
use crate::engines::traits::FetchError;
use scraper::{Html, Selector};

/// 人数字段的单位后缀
const COUNT_SUFFIX: char = '人';

/// 单元格标签对应的岗位字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    City,
    Department,
    JobName,
    Code,
    Recruits,
    Educational,
    Applicants,
    Remark,
}

impl Field {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "地市" => Some(Field::City),
            "用人单位" => Some(Field::Department),
            "招考职位" => Some(Field::JobName),
            "职位代码" => Some(Field::Code),
            "招考人数" => Some(Field::Recruits),
            "学历" => Some(Field::Educational),
            "报名人数" => Some(Field::Applicants),
            "备注" => Some(Field::Remark),
            _ => None,
        }
    }
}

/// 解析接口返回的 `<td attr="标签：">值</td>` 片段
///
/// 片段中没有任何带 `attr` 属性的单元格时视为站点返回了错误页，
/// 返回 [`FetchError::Malformed`]。未知标签会被忽略，人数字段解析失败按 0 处理。
pub fn parse_job_detail(fragment: &str) -> Result<JobDetail, FetchError> {
    // td 只有在 table 上下文中才会被 html5ever 保留
    let document = Html::parse_document(&format!(
        "<html><body><table>{}</table></body></html>",
        fragment
    ));
    let cell_selector = Selector::parse("td[attr]")
        .map_err(|_| FetchError::Decode("invalid cell selector".to_string()))?;

    let mut job: Option<JobDetail> = None;
    for cell in document.select(&cell_selector) {
        let Some(attr) = cell.value().attr("attr") else {
            continue;
        };
        let job = job.get_or_insert_with(JobDetail::default);
        let value = cell.text().collect::<String>().trim().to_string();

        match Field::from_label(normalize_label(attr)) {
            Some(Field::City) => job.city = value,
            Some(Field::Department) => job.department = value,
            Some(Field::JobName) => job.job_name = value,
            Some(Field::Code) => job.code = value,
            Some(Field::Recruits) => job.recruits_number = parse_count(&value),
            Some(Field::Educational) => job.educational = value,
            Some(Field::Applicants) => job.applicants_number = parse_count(&value),
            Some(Field::Remark) => job.remark = value,
            None => {}
        }
    }

    job.ok_or(FetchError::Malformed)
}

/// 去掉标签末尾的冒号与空白
fn normalize_label(attr: &str) -> &str {
    attr.trim().trim_end_matches(['：', ':']).trim_end()
}

/// 解析形如 `12人` 的人数，格式异常时返回 0
pub fn parse_count(value: &str) -> u32 {
    let value = value.trim();
    value
        .strip_suffix(COUNT_SUFFIX)
        .unwrap_or(value)
        .trim()
        .parse()
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
