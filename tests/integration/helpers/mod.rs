// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::json;
use std::time::Duration;
use sxsk::config::settings::Settings;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ENDPOINT_PATH: &str = "/zt/2024skbmrscx/app/executor.php";

/// 构造接口返回的 `<td>` 片段
pub fn fragment(code: &str, city: &str, recruits: u32, applicants: u32) -> String {
    format!(
        concat!(
            "<td attr=\"地市：\">{}</td>",
            "<td attr=\"用人单位：\">{}人民政府</td>",
            "<td attr=\"招考职位：\">综合管理</td>",
            "<td attr=\"职位代码：\">{}</td>",
            "<td attr=\"招考人数：\">{}人</td>",
            "<td attr=\"学历：\">本科</td>",
            "<td attr=\"报名人数：\">{}人</td>",
        ),
        city, city, code, recruits, applicants
    )
}

/// 指向模拟服务器的配置
pub fn settings_for(server: &MockServer) -> Settings {
    let mut settings = Settings::default();
    settings.query.endpoint = format!("{}{}", server.uri(), ENDPOINT_PATH);
    settings
}

/// 为某个职位代码挂载成功响应
pub async fn mount_job(server: &MockServer, code: &str, html: String, delay: Duration) {
    Mock::given(method("POST"))
        .and(path(ENDPOINT_PATH))
        .and(body_string_contains(format!("gwdm={}", code)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "code": 1, "str": html }))
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

/// 为某个职位代码挂载任意状态码的响应
pub async fn mount_status(server: &MockServer, code: &str, status: u16, delay: Duration) {
    Mock::given(method("POST"))
        .and(path(ENDPOINT_PATH))
        .and(body_string_contains(format!("gwdm={}", code)))
        .respond_with(ResponseTemplate::new(status).set_delay(delay))
        .mount(server)
        .await;
}
