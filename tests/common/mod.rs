//! 集成测试公共设施
//!
//! 每个测试使用独立的内存 SQLite 数据库。

#![allow(unused_macros, dead_code)]

use std::sync::Arc;

use course_registry::config::DatabaseConfig;
use course_registry::storage::Storage;
use course_registry::storage::sea_orm_storage::SeaOrmStorage;

/// 创建已完成迁移的内存存储
pub async fn memory_storage() -> Arc<dyn Storage> {
    let config = DatabaseConfig {
        url: ":memory:".to_string(),
        pool_size: 1,
        timeout: 5,
    };
    let storage = SeaOrmStorage::connect(&config)
        .await
        .expect("failed to create in-memory storage");
    Arc::new(storage)
}

/// 与默认配置一致的请求体上限
pub const MAX_PAYLOAD_SIZE: usize = 1_048_576;

/// 按生产环境的方式组装应用（路径规范化、参数错误处理、路由与 404 兜底）
macro_rules! init_app {
    ($storage:expr) => {
        init_app!($storage, common::MAX_PAYLOAD_SIZE)
    };
    ($storage:expr, $json_limit:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(actix_web::middleware::NormalizePath::trim())
                .app_data(
                    actix_web::web::QueryConfig::default()
                        .error_handler(course_registry::utils::query_error_handler),
                )
                .app_data(course_registry::utils::json_config($json_limit))
                .app_data(actix_web::web::Data::new($storage))
                .configure(course_registry::routes::configure_api_routes)
                .default_service(
                    actix_web::web::route().to(course_registry::routes::not_found),
                ),
        )
        .await
    };
}

/// 发送请求，返回状态码与 JSON 响应体（空响应体为 Null）
macro_rules! send {
    ($app:expr, $req:expr) => {{
        let resp = actix_web::test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body = actix_web::test::read_body(resp).await;
        let json: serde_json::Value = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&body).expect("response body is not valid JSON")
        };
        (status, json)
    }};
}

/// 创建学生并返回其 ID
macro_rules! create_student {
    ($app:expr, $name:expr) => {{
        let (status, body) = send!(
            $app,
            actix_web::test::TestRequest::post()
                .uri("/api/v1/students/")
                .set_json(serde_json::json!({ "name": $name }))
        );
        assert_eq!(status, actix_web::http::StatusCode::CREATED, "{body}");
        body["id"].as_i64().expect("student id")
    }};
}

/// 创建课程并返回响应体
macro_rules! create_course {
    ($app:expr, $name:expr, $students:expr) => {{
        let students: Vec<i64> = $students;
        let (status, body) = send!(
            $app,
            actix_web::test::TestRequest::post()
                .uri("/api/v1/courses/")
                .set_json(serde_json::json!({ "name": $name, "students": students }))
        );
        assert_eq!(status, actix_web::http::StatusCode::CREATED, "{body}");
        body
    }};
}

/// 将 JSON 数组中的整数收集为排序后的列表，用于集合比较
pub fn sorted_ids(value: &serde_json::Value) -> Vec<i64> {
    let mut ids: Vec<i64> = value
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|v| v.as_i64().expect("expected an integer id"))
        .collect();
    ids.sort_unstable();
    ids
}
