//! 请求参数错误处理
//!
//! 将 JSON 请求体与查询参数的解析失败统一转换为带错误码的 400 响应。

use actix_web::{
    HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError, QueryPayloadError},
    web,
};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

/// JSON 提取器配置：请求体大小上限与错误处理器
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(json_error_handler)
}

/// JSON 请求体错误处理器
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "Content type must be application/json".to_string(),
        JsonPayloadError::Deserialize(e) => format!("Invalid request body: {e}"),
        JsonPayloadError::Overflow { limit }
        | JsonPayloadError::OverflowKnownLength { limit, .. } => {
            format!("Request body exceeds the limit of {limit} bytes")
        }
        other => format!("Invalid request body: {other}"),
    };

    debug!("JSON payload rejected on {}: {}", req.path(), message);

    let response = match &err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            HttpResponse::PayloadTooLarge()
                .json(ApiResponse::error(ErrorCode::BadRequest, message))
        }
        _ => HttpResponse::BadRequest().json(ApiResponse::error(ErrorCode::BadRequest, message)),
    };

    InternalError::from_response(err, response).into()
}

/// 查询参数错误处理器
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        QueryPayloadError::Deserialize(e) => format!("Invalid query parameters: {e}"),
        other => format!("Invalid query parameters: {other}"),
    };

    debug!("Query string rejected on {}: {}", req.path(), message);

    let response =
        HttpResponse::BadRequest().json(ApiResponse::error(ErrorCode::BadRequest, message));

    InternalError::from_response(err, response).into()
}
