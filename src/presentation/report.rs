// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job::JobDetail;
use crate::domain::models::outcome::{BatchReport, FailedCode};
use comfy_table::{presets::ASCII_FULL, Cell, CellAlignment, Table};
use std::cmp::Ordering;

const JOB_HEADER: [&str; 8] = [
    "职位代码",
    "地市",
    "用人单位",
    "招考职位",
    "招考人数",
    "学历",
    "报名人数",
    "比值",
];

const FAILURE_HEADER: [&str; 2] = ["职位代码", "错误信息"];

/// 排序规则：比值降序，比值相同时按职位代码升序
pub fn compare_jobs(a: &JobDetail, b: &JobDetail) -> Ordering {
    b.ratio()
        .total_cmp(&a.ratio())
        .then_with(|| a.code.cmp(&b.code))
}

pub fn sort_jobs(jobs: &mut [JobDetail]) {
    jobs.sort_by(compare_jobs);
}

/// 失败列表按职位代码升序，重复代码保持原有顺序
pub fn sort_failures(failures: &mut [FailedCode]) {
    failures.sort_by(|a, b| a.code.cmp(&b.code));
}

/// 比值格式化为两位小数的百分比
pub fn format_ratio(ratio: f64) -> String {
    if ratio.is_infinite() {
        "∞".to_string()
    } else {
        format!("{:.2}%", ratio * 100.0)
    }
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL).set_header(header.to_vec());
    table
}

/// 渲染岗位表格，列表为空时返回 `None`
pub fn render_jobs(jobs: &[JobDetail]) -> Option<String> {
    if jobs.is_empty() {
        return None;
    }

    let mut sorted = jobs.to_vec();
    sort_jobs(&mut sorted);

    let mut table = new_table(&JOB_HEADER);
    for job in &sorted {
        table.add_row(vec![
            Cell::new(&job.code),
            Cell::new(&job.city),
            Cell::new(&job.department),
            Cell::new(&job.job_name),
            Cell::new(job.recruits_number).set_alignment(CellAlignment::Right),
            Cell::new(&job.educational),
            Cell::new(job.applicants_number).set_alignment(CellAlignment::Right),
            Cell::new(format_ratio(job.ratio())).set_alignment(CellAlignment::Right),
        ]);
    }
    Some(table.to_string())
}

/// 渲染失败表格，列表为空时返回 `None`
pub fn render_failures(failures: &[FailedCode]) -> Option<String> {
    if failures.is_empty() {
        return None;
    }

    let mut sorted = failures.to_vec();
    sort_failures(&mut sorted);

    let mut table = new_table(&FAILURE_HEADER);
    for failed in &sorted {
        table.add_row(vec![Cell::new(&failed.code), Cell::new(&failed.error)]);
    }
    Some(table.to_string())
}

/// 渲染完整报告：先成功表格，后失败表格
pub fn render_report(report: &BatchReport) -> String {
    [render_jobs(&report.successes), render_failures(&report.failures)]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
