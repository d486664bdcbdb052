// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 批量查询集成测试
///
/// 使用真实的 reqwest 查询器访问 wiremock 服务器，覆盖成功、失败与乱序完成场景

#[cfg(test)]
mod tests {
    use crate::integration::helpers::{fragment, mount_job, mount_status, settings_for};
    use serde_json::json;
    use std::time::Duration;
    use sxsk::application::usecases::query_jobs::{split_codes, QueryJobsUseCase};
    use sxsk::engines::traits::FetchError;
    use sxsk::presentation::report::{render_failures, render_jobs, sort_jobs};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_success_and_server_error_are_reported_separately() {
        let server = MockServer::start().await;
        mount_job(&server, "A1", fragment("A1", "西安市", 10, 30), Duration::ZERO).await;
        mount_status(&server, "A2", 500, Duration::ZERO).await;

        let use_case = QueryJobsUseCase::from_settings(&settings_for(&server));
        let report = use_case.execute(&split_codes("A1,A2")).await.unwrap();

        assert_eq!(report.total(), 2);
        assert_eq!(report.successes.len(), 1);
        assert_eq!(report.successes[0].code, "A1");
        assert_eq!(report.successes[0].city, "西安市");
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].code, "A2");
        assert_eq!(report.failures[0].error, FetchError::Server(500));

        let jobs = render_jobs(&report.successes).unwrap();
        assert!(jobs.contains("33.33%"));
        let failures = render_failures(&report.failures).unwrap();
        assert!(failures.contains("A2"));
        assert!(!failures.contains("A1"));
    }

    #[tokio::test]
    async fn test_failures_keep_their_code_under_out_of_order_completion() {
        let server = MockServer::start().await;
        // Slowest responses go to the first codes in the list
        mount_status(&server, "E1", 503, Duration::from_millis(300)).await;
        mount_job(&server, "S1", fragment("S1", "宝鸡市", 1, 4), Duration::from_millis(250)).await;
        mount_status(&server, "E2", 404, Duration::from_millis(200)).await;
        mount_job(&server, "S2", fragment("S2", "咸阳市", 2, 4), Duration::from_millis(150)).await;
        mount_status(&server, "E3", 500, Duration::from_millis(100)).await;
        mount_job(&server, "S3", fragment("S3", "汉中市", 3, 4), Duration::ZERO).await;

        let use_case = QueryJobsUseCase::from_settings(&settings_for(&server));
        let report = use_case
            .execute(&split_codes("E1,S1,E2,S2,E3,S3"))
            .await
            .unwrap();

        assert_eq!(report.total(), 6);

        let mut failures: Vec<(String, FetchError)> = report
            .failures
            .iter()
            .map(|f| (f.code.clone(), f.error.clone()))
            .collect();
        failures.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(
            failures,
            vec![
                ("E1".to_string(), FetchError::Server(503)),
                ("E2".to_string(), FetchError::Server(404)),
                ("E3".to_string(), FetchError::Server(500)),
            ]
        );

        let mut jobs = report.successes.clone();
        sort_jobs(&mut jobs);
        let codes: Vec<&str> = jobs.iter().map(|j| j.code.as_str()).collect();
        assert_eq!(codes, vec!["S3", "S2", "S1"]);
    }

    #[tokio::test]
    async fn test_decode_and_malformed_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(wiremock::matchers::body_string_contains("gwdm=BADJSON"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(wiremock::matchers::body_string_contains("gwdm=NODATA"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "code": 1, "str": "<p>暂无数据</p>" })),
            )
            .mount(&server)
            .await;

        let use_case = QueryJobsUseCase::from_settings(&settings_for(&server));
        let report = use_case
            .execute(&split_codes("BADJSON,NODATA"))
            .await
            .unwrap();

        assert!(report.successes.is_empty());
        assert_eq!(report.failures.len(), 2);
        for failure in &report.failures {
            match failure.code.as_str() {
                "BADJSON" => assert!(matches!(failure.error, FetchError::Decode(_))),
                "NODATA" => assert_eq!(failure.error, FetchError::Malformed),
                other => panic!("unexpected code {}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let server = MockServer::start().await;
        mount_job(&server, "SLOW", fragment("SLOW", "榆林市", 1, 1), Duration::from_secs(3)).await;
        mount_job(&server, "FAST", fragment("FAST", "延安市", 1, 1), Duration::ZERO).await;

        let mut settings = settings_for(&server);
        settings.http.timeout_secs = 1;
        let use_case = QueryJobsUseCase::from_settings(&settings);
        let report = use_case.execute(&split_codes("SLOW,FAST")).await.unwrap();

        assert_eq!(report.successes.len(), 1);
        assert_eq!(report.successes[0].code, "FAST");
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].code, "SLOW");
        assert!(matches!(report.failures[0].error, FetchError::Transport(_)));
    }

    #[tokio::test]
    async fn test_request_count_matches_input_including_duplicates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 1,
                "str": "<td attr=\"招考人数：\">0人</td>"
            })))
            .expect(12)
            .mount(&server)
            .await;

        let use_case = QueryJobsUseCase::from_settings(&settings_for(&server));
        let codes: Vec<String> = (0..12).map(|i| format!("D{}", i % 4)).collect();
        let report = use_case.execute(&codes).await.unwrap();

        assert_eq!(report.successes.len(), 12);
        assert!(report.successes.iter().all(|j| j.ratio() == 0.0));
        server.verify().await;
    }
}
